//! # Archive and Broadcast Arguments
//!
//! Output modes, stream selection modes, composed-video layouts, archive
//! start options, and list paging for archive requests.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::resolution::{Resolution, ResolutionSet};
use crate::value::{require_key, require_mapping, require_str};

/// Largest page size accepted by list endpoints.
pub const MAX_LIST_COUNT: i64 = 1000;

/// Identifier of an archive. The platform issues these as UUIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchiveId(Uuid);

impl ArchiveId {
    /// Create an archive identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ArchiveId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(|e| {
            ValidationError::invalid("archiveId", format!("\"{s}\" is not a UUID: {e}"))
        })
    }
}

impl std::fmt::Display for ArchiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate an archive identifier.
pub fn validate_archive_id(value: &str) -> Result<(), ValidationError> {
    value.parse::<ArchiveId>().map(|_| ())
}

wire_enum! {
    /// How an archive records the session.
    pub enum OutputMode("outputMode") {
        /// A single composed video file.
        Composed => "composed",
        /// One file per stream.
        Individual => "individual",
    }
}

wire_enum! {
    /// How streams are selected for an archive or broadcast.
    pub enum StreamMode("streamMode") {
        /// Every stream in the session is included.
        Auto => "auto",
        /// Streams are added and removed explicitly.
        Manual => "manual",
    }
}

wire_enum! {
    /// Composed-video layout type.
    pub enum LayoutType("type") {
        BestFit => "bestFit",
        /// Layout described by a caller-supplied stylesheet.
        Custom => "custom",
        HorizontalPresentation => "horizontalPresentation",
        Pip => "pip",
        VerticalPresentation => "verticalPresentation",
    }
}

/// Layout of a composed archive or broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Layout applied to the composed output.
    #[serde(rename = "type")]
    layout_type: LayoutType,
    /// CSS for a custom layout. Set only with [`LayoutType::Custom`].
    #[serde(skip_serializing_if = "Option::is_none")]
    stylesheet: Option<String>,
    /// Layout used while a screenshare stream is present. Best-fit only.
    #[serde(skip_serializing_if = "Option::is_none")]
    screenshare_type: Option<LayoutType>,
}

impl Layout {
    /// A predefined layout. Use [`Layout::custom`] for stylesheets.
    pub fn predefined(layout_type: LayoutType) -> Result<Self, ValidationError> {
        Self::build(layout_type, None, None)
    }

    /// A custom layout driven by `stylesheet`.
    pub fn custom(stylesheet: impl Into<String>) -> Result<Self, ValidationError> {
        Self::build(LayoutType::Custom, Some(stylesheet.into()), None)
    }

    /// `bestFit` with a distinct layout while a screen share is active.
    pub fn best_fit_with_screenshare(screenshare: LayoutType) -> Result<Self, ValidationError> {
        Self::build(LayoutType::BestFit, None, Some(screenshare))
    }

    fn build(
        layout_type: LayoutType,
        stylesheet: Option<String>,
        screenshare_type: Option<LayoutType>,
    ) -> Result<Self, ValidationError> {
        match (layout_type, &stylesheet) {
            (LayoutType::Custom, None) => {
                return Err(ValidationError::invalid(
                    "stylesheet",
                    "required for custom layouts",
                ));
            }
            (LayoutType::Custom, Some(css)) if css.is_empty() => {
                return Err(ValidationError::invalid("stylesheet", "must be non-empty"));
            }
            (LayoutType::Custom, Some(_)) | (_, None) => {}
            (other, Some(_)) => {
                return Err(ValidationError::invalid(
                    "stylesheet",
                    format!("only allowed with custom layouts, not {other}"),
                ));
            }
        }
        if let Some(screenshare) = screenshare_type {
            if layout_type != LayoutType::BestFit {
                return Err(ValidationError::invalid(
                    "screenshareType",
                    format!("only allowed with bestFit layouts, not {layout_type}"),
                ));
            }
            if screenshare == LayoutType::Custom {
                return Err(ValidationError::invalid(
                    "screenshareType",
                    "custom is not a valid screen share layout",
                ));
            }
        }
        Ok(Self {
            layout_type,
            stylesheet,
            screenshare_type,
        })
    }

    /// Decode a layout from untyped JSON: `{"type", "stylesheet"?, "screenshareType"?}`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let map = require_mapping("layout", value)?;
        let layout_type = require_str("type", require_key(map, "type")?)?.parse()?;
        let stylesheet = map
            .get("stylesheet")
            .map(|v| require_str("stylesheet", v).map(str::to_string))
            .transpose()?;
        let screenshare_type = map
            .get("screenshareType")
            .map(|v| -> Result<LayoutType, ValidationError> {
                require_str("screenshareType", v)?
                    .parse::<LayoutType>()
                    .map_err(|e| ValidationError::invalid("screenshareType", e.reason()))
            })
            .transpose()?;
        Self::build(layout_type, stylesheet, screenshare_type)
    }

    pub fn layout_type(&self) -> LayoutType {
        self.layout_type
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    pub fn screenshare_type(&self) -> Option<LayoutType> {
        self.screenshare_type
    }
}

/// Validate an untyped layout. See [`Layout::from_value`].
pub fn validate_layout(value: &Value) -> Result<(), ValidationError> {
    Layout::from_value(value).map(|_| ())
}

/// Options for starting an archive.
///
/// Defaults: audio and video, composed output, automatic stream selection,
/// platform-chosen resolution and layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveOptions {
    /// Archive name. Must be non-empty when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Record audio.
    pub has_audio: bool,
    /// Record video.
    pub has_video: bool,
    /// One composed file or one file per stream.
    pub output_mode: OutputMode,
    /// Composed output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    /// Composed output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Whether streams join the archive automatically.
    pub stream_mode: StreamMode,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            name: None,
            has_audio: true,
            has_video: true,
            output_mode: OutputMode::Composed,
            resolution: None,
            layout: None,
            stream_mode: StreamMode::Auto,
        }
    }
}

impl ArchiveOptions {
    /// Check option consistency, with `resolutions` as the allow-list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if neither audio nor
    /// video is recorded, the name is empty, a resolution or layout is set
    /// for individual output, or the resolution is not allow-listed.
    pub fn check(&self, resolutions: &ResolutionSet) -> Result<(), ValidationError> {
        if !self.has_audio && !self.has_video {
            return Err(ValidationError::invalid(
                "hasVideo",
                "an archive must record audio, video, or both",
            ));
        }
        if self.name.as_deref() == Some("") {
            return Err(ValidationError::invalid("name", "must be non-empty when given"));
        }
        let individual = self.output_mode == OutputMode::Individual;
        if let Some(resolution) = &self.resolution {
            if individual {
                return Err(ValidationError::invalid(
                    "resolution",
                    "only allowed with composed output",
                ));
            }
            resolutions.ensure(resolution)?;
        }
        if individual && self.layout.is_some() {
            return Err(ValidationError::invalid(
                "layout",
                "only allowed with composed output",
            ));
        }
        Ok(())
    }
}

/// Validate list paging: `offset` non-negative, `count` (when given)
/// between 0 and [`MAX_LIST_COUNT`].
pub fn validate_offset_and_count(offset: i64, count: Option<i64>) -> Result<(), ValidationError> {
    if offset < 0 {
        return Err(ValidationError::invalid(
            "offset",
            format!("{offset} is negative"),
        ));
    }
    if let Some(count) = count {
        if !(0..=MAX_LIST_COUNT).contains(&count) {
            return Err(ValidationError::invalid(
                "count",
                format!("{count} is outside 0..={MAX_LIST_COUNT}"),
            ));
        }
    }
    Ok(())
}

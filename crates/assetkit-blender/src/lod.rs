//! Host-independent LOD generation.
//!
//! A LOD is a decimated duplicate of a source object, named
//! `{source}_lod{level}` and tagged with its level in the
//! [`LOD_PROPERTY_KEY`] custom property.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BlenderError, BlenderResult};
use crate::host::{SceneHost, DECIMATE_MODIFIER_NAME};

/// Custom property holding the LOD level of a generated object.
pub const LOD_PROPERTY_KEY: &str = "o3de.default.lod";

/// A LOD index in `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct LodLevel(u8);

impl LodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Returns the level as an integer.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for LodLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<i64> for LodLevel {
    type Error = BlenderError;

    fn try_from(level: i64) -> BlenderResult<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(BlenderError::InvalidLodLevel { level })
        }
    }
}

impl From<LodLevel> for i64 {
    fn from(level: LodLevel) -> Self {
        i64::from(level.0)
    }
}

impl fmt::Display for LodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Decimate modifier ratio in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DecimateRatio(f64);

impl DecimateRatio {
    /// Returns the ratio as a float.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for DecimateRatio {
    fn default() -> Self {
        Self(0.8)
    }
}

impl TryFrom<f64> for DecimateRatio {
    type Error = BlenderError;

    fn try_from(ratio: f64) -> BlenderResult<Self> {
        // NaN fails the range check.
        if (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(BlenderError::InvalidRatio { ratio })
        }
    }
}

impl From<DecimateRatio> for f64 {
    fn from(ratio: DecimateRatio) -> Self {
        ratio.0
    }
}

impl fmt::Display for DecimateRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the name of the LOD object generated from `source`.
pub fn lod_object_name(source: &str, level: LodLevel) -> String {
    format!("{}_lod{}", source, level)
}

/// Generates a LOD of the host's active object.
///
/// Returns the LOD object's name, or `None` without touching the scene when
/// there is no active object.
pub fn generate_lod<H: SceneHost + ?Sized>(
    host: &mut H,
    level: LodLevel,
    ratio: DecimateRatio,
) -> BlenderResult<Option<String>> {
    let Some(source) = host.active_object_name() else {
        return Ok(None);
    };

    let lod_name = lod_object_name(&source, level);

    host.duplicate_active()?;
    host.rename_active(&lod_name)?;
    let modifier = host.add_decimate_modifier(DECIMATE_MODIFIER_NAME, ratio.get(), true)?;
    host.apply_modifier(&modifier)?;
    host.set_custom_property(LOD_PROPERTY_KEY, i64::from(level))?;

    Ok(Some(lod_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records every call as a readable line.
    #[derive(Default)]
    struct FakeScene {
        active: Option<String>,
        /// Modifiers on the active object, named the way Blender names them.
        modifiers: Vec<String>,
        calls: Vec<String>,
    }

    impl SceneHost for FakeScene {
        fn active_object_name(&self) -> Option<String> {
            self.active.clone()
        }

        fn duplicate_active(&mut self) -> BlenderResult<()> {
            self.calls.push("duplicate".to_string());
            Ok(())
        }

        fn rename_active(&mut self, name: &str) -> BlenderResult<()> {
            self.calls.push(format!("rename {}", name));
            self.active = Some(name.to_string());
            Ok(())
        }

        fn add_decimate_modifier(
            &mut self,
            name: &str,
            ratio: f64,
            collapse_triangulate: bool,
        ) -> BlenderResult<String> {
            let mut actual = name.to_string();
            let mut n = 0;
            while self.modifiers.contains(&actual) {
                n += 1;
                actual = format!("{}.{:03}", name, n);
            }
            self.calls
                .push(format!("decimate {} {} {}", actual, ratio, collapse_triangulate));
            self.modifiers.push(actual.clone());
            Ok(actual)
        }

        fn apply_modifier(&mut self, name: &str) -> BlenderResult<()> {
            self.calls.push(format!("apply {}", name));
            self.modifiers.retain(|m| m != name);
            Ok(())
        }

        fn set_custom_property(&mut self, key: &str, value: i64) -> BlenderResult<()> {
            self.calls.push(format!("prop {}={}", key, value));
            Ok(())
        }
    }

    #[test]
    fn test_level_range() {
        assert_eq!(LodLevel::try_from(1).unwrap().get(), 1);
        assert_eq!(LodLevel::try_from(4).unwrap().get(), 4);
        assert!(LodLevel::try_from(0).is_err());
        assert!(LodLevel::try_from(5).is_err());
        assert_eq!(LodLevel::default().get(), 1);
    }

    #[test]
    fn test_ratio_range() {
        assert_eq!(DecimateRatio::try_from(0.0).unwrap().get(), 0.0);
        assert_eq!(DecimateRatio::try_from(1.0).unwrap().get(), 1.0);
        assert!(DecimateRatio::try_from(-0.1).is_err());
        assert!(DecimateRatio::try_from(1.01).is_err());
        assert!(DecimateRatio::try_from(f64::NAN).is_err());
        assert_eq!(DecimateRatio::default().get(), 0.8);
    }

    #[test]
    fn test_level_rejects_out_of_range_json() {
        assert!(serde_json::from_str::<LodLevel>("3").is_ok());
        assert!(serde_json::from_str::<LodLevel>("9").is_err());
    }

    #[test]
    fn test_lod_object_name() {
        let level = LodLevel::try_from(2).unwrap();
        assert_eq!(lod_object_name("Rock", level), "Rock_lod2");
    }

    #[test]
    fn test_generate_lod_runs_operations_in_order() {
        let mut scene = FakeScene {
            active: Some("Rock".to_string()),
            ..Default::default()
        };

        let name = generate_lod(
            &mut scene,
            LodLevel::try_from(3).unwrap(),
            DecimateRatio::try_from(0.5).unwrap(),
        )
        .unwrap();

        assert_eq!(name.as_deref(), Some("Rock_lod3"));
        assert_eq!(
            scene.calls,
            vec![
                "duplicate",
                "rename Rock_lod3",
                "decimate Decimate 0.5 true",
                "apply Decimate",
                "prop o3de.default.lod=3",
            ]
        );
    }

    #[test]
    fn test_generate_lod_applies_the_modifier_it_added() {
        let mut scene = FakeScene {
            active: Some("Rock".to_string()),
            modifiers: vec!["Decimate".to_string()],
            ..Default::default()
        };

        generate_lod(&mut scene, LodLevel::default(), DecimateRatio::try_from(0.5).unwrap())
            .unwrap();

        assert_eq!(scene.calls[2], "decimate Decimate.001 0.5 true");
        assert_eq!(scene.calls[3], "apply Decimate.001");
        assert_eq!(scene.modifiers, vec!["Decimate"]);
    }

    #[test]
    fn test_generate_lod_without_active_object_is_noop() {
        let mut scene = FakeScene::default();

        let name = generate_lod(&mut scene, LodLevel::default(), DecimateRatio::default()).unwrap();

        assert!(name.is_none());
        assert!(scene.calls.is_empty());
    }
}

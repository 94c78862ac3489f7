//! Animation actions: one instruction against one named part.
//!
//! Actions are authored in an external animation tool and stored as
//! key-value documents:
//!
//! ```json
//! { "cuboid": "head", "action": "ROTATE", "value": { "x": 0.5, "y": 0.0, "z": 0.0 } }
//! ```
//!
//! Replaying them against a model is left to the caller.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// What an action does to its target part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Change the part's rotation.
    Rotate,
    /// Change the part's position.
    Move,
}

impl ActionKind {
    /// Name as stored in documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rotate => "ROTATE",
            Self::Move => "MOVE",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROTATE" => Ok(Self::Rotate),
            "MOVE" => Ok(Self::Move),
            other => Err(RigError::UnknownAction(other.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ValueDoc {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Serialize, Deserialize)]
struct ActionDoc {
    cuboid: String,
    action: String,
    value: ValueDoc,
}

/// A single animation instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationAction {
    cuboid: String,
    action: ActionKind,
    value: Vec3,
}

impl AnimationAction {
    /// Action on `cuboid` with a zero value.
    #[must_use]
    pub fn new(cuboid: impl Into<String>, action: ActionKind) -> Self {
        Self {
            cuboid: cuboid.into(),
            action,
            value: Vec3::ZERO,
        }
    }

    /// Action with an explicit value.
    #[must_use]
    pub fn with_value(mut self, value: Vec3) -> Self {
        self.value = value;
        self
    }

    /// Name of the target part.
    #[must_use]
    pub fn cuboid(&self) -> &str {
        &self.cuboid
    }

    /// Retarget the action.
    pub fn set_cuboid(&mut self, cuboid: impl Into<String>) {
        self.cuboid = cuboid.into();
    }

    /// What the action does.
    #[must_use]
    pub fn action(&self) -> ActionKind {
        self.action
    }

    /// Change what the action does.
    pub fn set_action(&mut self, action: ActionKind) {
        self.action = action;
    }

    /// The action's three-component value.
    #[must_use]
    pub fn value(&self) -> Vec3 {
        self.value
    }

    /// Replace the action's value.
    pub fn set_value(&mut self, value: Vec3) {
        self.value = value;
    }

    /// Independent duplicate with the same fields.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Serialize to a key-value document.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Document`] if serialization fails.
    pub fn to_document(&self) -> Result<serde_json::Value, RigError> {
        let doc = ActionDoc {
            cuboid: self.cuboid.clone(),
            action: self.action.as_str().to_owned(),
            value: ValueDoc {
                x: self.value.x,
                y: self.value.y,
                z: self.value.z,
            },
        };
        Ok(serde_json::to_value(doc)?)
    }

    /// Deserialize from a key-value document.
    ///
    /// # Errors
    ///
    /// Missing fields are a [`RigError::Document`]; an action name other
    /// than `ROTATE` or `MOVE` is a [`RigError::UnknownAction`].
    pub fn from_document(document: &serde_json::Value) -> Result<Self, RigError> {
        let doc = ActionDoc::deserialize(document)?;
        Ok(Self {
            cuboid: doc.cuboid,
            action: doc.action.parse()?,
            value: Vec3::new(doc.value.x, doc.value.y, doc.value.z),
        })
    }

    /// Serialize to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Document`] if serialization fails.
    pub fn to_json(&self) -> Result<String, RigError> {
        Ok(serde_json::to_string(&self.to_document()?)?)
    }

    /// Deserialize from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Document`] for malformed JSON and the errors of
    /// [`from_document`](Self::from_document).
    pub fn from_json(json: &str) -> Result<Self, RigError> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        Self::from_document(&document)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn document_layout() {
        let action = AnimationAction::new("head", ActionKind::Rotate)
            .with_value(Vec3::new(0.5, -1.0, 2.0));
        let doc = action.to_document().unwrap();
        assert_eq!(
            doc,
            json!({
                "cuboid": "head",
                "action": "ROTATE",
                "value": { "x": 0.5, "y": -1.0, "z": 2.0 }
            })
        );
    }

    #[test]
    fn round_trip_is_exact() {
        let actions = [
            AnimationAction::new("tail", ActionKind::Move)
                .with_value(Vec3::new(0.1, 1.0 / 3.0, -7.25e-3)),
            AnimationAction::new("", ActionKind::Rotate),
            AnimationAction::new("left_wing.tip", ActionKind::Rotate)
                .with_value(Vec3::new(f32::MAX, f32::MIN_POSITIVE, -0.0)),
        ];
        for action in actions {
            let back = AnimationAction::from_document(&action.to_document().unwrap())
                .unwrap();
            assert_eq!(back, action);
            let back = AnimationAction::from_json(&action.to_json().unwrap()).unwrap();
            assert_eq!(back, action);
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        let doc = json!({
            "cuboid": "head",
            "action": "SPIN",
            "value": { "x": 0.0, "y": 0.0, "z": 0.0 }
        });
        assert!(matches!(
            AnimationAction::from_document(&doc),
            Err(RigError::UnknownAction(name)) if name == "SPIN"
        ));
    }

    #[test]
    fn missing_value_is_a_document_error() {
        let doc = json!({ "cuboid": "head", "action": "MOVE" });
        assert!(matches!(
            AnimationAction::from_document(&doc),
            Err(RigError::Document(_))
        ));
    }

    #[test]
    fn copy_is_independent() {
        let original = AnimationAction::new("jaw", ActionKind::Rotate)
            .with_value(Vec3::X);
        let mut copy = original.copy();
        assert_eq!(copy, original);
        copy.set_value(Vec3::Y);
        copy.set_cuboid("neck");
        copy.set_action(ActionKind::Move);
        assert_eq!(original.value(), Vec3::X);
        assert_eq!(original.cuboid(), "jaw");
        assert_eq!(original.action(), ActionKind::Rotate);
    }

    #[test]
    fn action_names_parse() {
        assert_eq!("MOVE".parse::<ActionKind>().unwrap(), ActionKind::Move);
        assert_eq!(ActionKind::Rotate.to_string(), "ROTATE");
        assert!("rotate".parse::<ActionKind>().is_err());
    }
}

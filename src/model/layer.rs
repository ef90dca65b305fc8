use std::collections::BTreeMap;

use crate::math::Point2;

/// Presentation attributes handed through to a renderer untouched.
pub type Style = BTreeMap<String, String>;

/// A named drawing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    pub style: Style,
}

impl Layer {
    /// Creates a visible layer with no style.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            style: Style::new(),
        }
    }

    /// Marks the layer as not drawn.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Sets one style attribute.
    #[must_use]
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }
}

/// Free text placed on the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point2,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f64,
    pub layer: String,
    pub style: Style,
}

impl Label {
    /// Creates an unrotated label on the `annotations` layer.
    #[must_use]
    pub fn new(text: impl Into<String>, at: Point2) -> Self {
        Self {
            text: text.into(),
            at,
            rotation: 0.0,
            layer: "annotations".to_owned(),
            style: Style::new(),
        }
    }

    /// Sets the rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Moves the label to another layer.
    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    /// Sets one style attribute.
    #[must_use]
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }
}

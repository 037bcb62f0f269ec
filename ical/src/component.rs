// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Generic component tree, RFC 5545 Section 3.4 and 3.6.

use crate::property::Property;

/// A `BEGIN:<kind>` ... `END:<kind>` block.
///
/// Children are owned, there are no back references. The kind is checked
/// when the component is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    kind: String,
    properties: Vec<Property>,
    children: Vec<Component>,
}

impl Component {
    /// Empty component.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a property.
    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Append a nested component.
    pub fn push_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Builder form of [`Component::push_property`].
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.push_property(property);
        self
    }

    /// Builder form of [`Component::push_child`].
    #[must_use]
    pub fn with_child(mut self, child: Component) -> Self {
        self.push_child(child);
        self
    }

    /// Component kind, e.g. `VEVENT`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Properties in emission order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Nested components in emission order.
    #[must_use]
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// First property with the given name, ASCII case-insensitive.
    #[must_use]
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.is_named(name))
    }

    /// All properties with the given name, ASCII case-insensitive.
    pub fn properties_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties.iter().filter(move |p| p.is_named(name))
    }

    /// Direct children of the given kind, ASCII case-insensitive.
    pub fn children_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Component> {
        self.children
            .iter()
            .filter(move |c| c.kind.eq_ignore_ascii_case(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_preserves_order() {
        let component = Component::new("VEVENT")
            .with_property(Property::text("SUMMARY", "a"))
            .with_property(Property::text("X-NOTE", "1"))
            .with_property(Property::text("X-NOTE", "2"))
            .with_child(Component::new("VALARM"));

        let names: Vec<_> = component.properties().iter().map(Property::name).collect();
        assert_eq!(names, ["SUMMARY", "X-NOTE", "X-NOTE"]);
        assert_eq!(component.properties_named("x-note").count(), 2);
        assert_eq!(component.children_of_kind("valarm").count(), 1);
    }

    #[test]
    fn test_find_property() {
        let mut component = Component::new("VCALENDAR");
        component.push_property(Property::token("VERSION", "2.0"));
        assert!(component.find_property("version").is_some());
        assert!(component.find_property("PRODID").is_none());
    }
}

use crate::{Field, FieldKind, RenderContext, RenderError};
use serde_json::Value;

///
/// Dashboard
///
/// Per-model definition: every resolved attribute with its field kind,
/// plus the three attribute subsets consumed by the view layer. Built
/// once (by a generated artifact or by hand), then immutable. Attribute
/// list membership is checked at first render, not at build time, so a
/// manually-edited definition fails with the offending attribute name
/// rather than silently rendering a partial page.
///

#[derive(Clone, Debug)]
pub struct Dashboard {
    type_name: String,
    attribute_types: Vec<(String, FieldKind)>,
    table_attributes: Vec<String>,
    show_page_attributes: Vec<String>,
    form_attributes: Vec<String>,
}

impl Dashboard {
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> DashboardBuilder {
        DashboardBuilder {
            type_name: type_name.into(),
            attribute_types: Vec::new(),
            table_attributes: Vec::new(),
            show_page_attributes: Vec::new(),
            form_attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn attribute_types(&self) -> &[(String, FieldKind)] {
        &self.attribute_types
    }

    #[must_use]
    pub fn attribute_kind(&self, attribute: &str) -> Option<&FieldKind> {
        self.attribute_types
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, kind)| kind)
    }

    #[must_use]
    pub fn table_attributes(&self) -> &[String] {
        &self.table_attributes
    }

    #[must_use]
    pub fn show_page_attributes(&self) -> &[String] {
        &self.show_page_attributes
    }

    #[must_use]
    pub fn form_attributes(&self) -> &[String] {
        &self.form_attributes
    }

    /// The attribute list backing a rendering context.
    #[must_use]
    pub fn attributes_for(&self, context: RenderContext) -> &[String] {
        match context {
            RenderContext::Index => &self.table_attributes,
            RenderContext::Show => &self.show_page_attributes,
            RenderContext::Form => &self.form_attributes,
        }
    }

    /// Construct a fresh field for one attribute in one render call.
    ///
    /// An attribute missing from `attribute_types` is a configuration
    /// error in the definition and is reported, never auto-corrected.
    pub fn field(
        &self,
        attribute: &str,
        value: Option<Value>,
        context: RenderContext,
    ) -> Result<Field, RenderError> {
        let kind =
            self.attribute_kind(attribute)
                .ok_or_else(|| RenderError::MalformedAttributeList {
                    dashboard: self.type_name.clone(),
                    attribute: attribute.to_string(),
                })?;

        Ok(Field::new(attribute, kind.clone(), value, context))
    }

    /// Construct fields for every attribute of a context, in order.
    pub fn fields_for(
        &self,
        context: RenderContext,
        mut value_of: impl FnMut(&str) -> Option<Value>,
    ) -> Result<Vec<Field>, RenderError> {
        self.attributes_for(context)
            .iter()
            .map(|attribute| self.field(attribute, value_of(attribute), context))
            .collect()
    }
}

///
/// DashboardBuilder
///

#[derive(Clone, Debug)]
pub struct DashboardBuilder {
    type_name: String,
    attribute_types: Vec<(String, FieldKind)>,
    table_attributes: Vec<String>,
    show_page_attributes: Vec<String>,
    form_attributes: Vec<String>,
}

impl DashboardBuilder {
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.attribute_types.push((name.into(), kind));
        self
    }

    #[must_use]
    pub fn table_attributes(mut self, names: &[&str]) -> Self {
        self.table_attributes = names.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn show_page_attributes(mut self, names: &[&str]) -> Self {
        self.show_page_attributes = names.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn form_attributes(mut self, names: &[&str]) -> Self {
        self.form_attributes = names.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn build(self) -> Dashboard {
        Dashboard {
            type_name: self.type_name,
            attribute_types: self.attribute_types,
            table_attributes: self.table_attributes,
            show_page_attributes: self.show_page_attributes,
            form_attributes: self.form_attributes,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn line_item_dashboard() -> Dashboard {
        Dashboard::builder("LineItem")
            .attribute("order", FieldKind::belongs_to())
            .attribute("product", FieldKind::belongs_to())
            .attribute("quantity", FieldKind::Number)
            .attribute("unit_price", FieldKind::Number)
            .table_attributes(&["order", "product", "quantity", "unit_price"])
            .show_page_attributes(&["order", "product", "quantity", "unit_price"])
            .form_attributes(&["order", "product", "quantity", "unit_price"])
            .build()
    }

    #[test]
    fn field_construction_uses_the_declared_kind() {
        let dashboard = line_item_dashboard();

        let field = dashboard
            .field("quantity", Some(serde_json::json!(3)), RenderContext::Show)
            .unwrap();

        assert_eq!(field.kind(), &FieldKind::Number);
        assert_eq!(field.resolve_partial().as_str(), "show/number");
    }

    #[test]
    fn listed_attribute_missing_from_types_fails_at_render() {
        let dashboard = Dashboard::builder("LineItem")
            .attribute("quantity", FieldKind::Number)
            .table_attributes(&["quantity", "total_price"])
            .build();

        let err = dashboard
            .field("total_price", None, RenderContext::Index)
            .unwrap_err();

        assert!(matches!(
            err,
            RenderError::MalformedAttributeList { dashboard, attribute }
                if dashboard == "LineItem" && attribute == "total_price"
        ));
    }

    #[test]
    fn fields_for_walks_the_context_list_in_order() {
        let dashboard = line_item_dashboard();

        let fields = dashboard
            .fields_for(RenderContext::Index, |_| None)
            .unwrap();

        let names: Vec<&str> = fields.iter().map(Field::attribute).collect();
        assert_eq!(names, ["order", "product", "quantity", "unit_price"]);
    }

    #[test]
    fn attributes_for_maps_contexts_to_lists() {
        let dashboard = Dashboard::builder("Customer")
            .attribute("name", FieldKind::Text)
            .table_attributes(&["name"])
            .show_page_attributes(&["name"])
            .form_attributes(&[])
            .build();

        assert_eq!(dashboard.attributes_for(RenderContext::Index), ["name"]);
        assert!(dashboard.attributes_for(RenderContext::Form).is_empty());
    }
}

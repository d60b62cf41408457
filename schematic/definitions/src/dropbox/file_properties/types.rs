//! File properties argument, result and error records.
//!
//! Properties are key/value pairs grouped under a template. A template is
//! owned by either a user or a team and fixes which field names a group may
//! carry.

use serde::{Deserialize, Serialize};

/// One key/value pair in a property group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyField {
    pub name: String,
    pub value: String,
}

impl PropertyField {
    /// A field of a property group, by name.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Property values attached to a file under one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroup {
    pub template_id: String,
    pub fields: Vec<PropertyField>,
}

/// Field value type. Only strings are supported by the server today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PropertyType {
    String,
    #[serde(other)]
    Other,
}

/// Definition of one field in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFieldTemplate {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
}

/// Lookup failure for a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LookupError {
    MalformedPath { malformed_path: String },
    NotFound,
    NotFile,
    NotFolder,
    RestrictedContent,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LookUpPropertiesError {
    PropertyGroupNotFound,
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPropertiesArg {
    pub path: String,
    pub property_groups: Vec<PropertyGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum AddPropertiesError {
    TemplateNotFound { template_not_found: String },
    RestrictedContent,
    Path { path: LookupError },
    UnsupportedFolder,
    PropertyFieldTooLarge,
    DoesNotFitTemplate,
    DuplicatePropertyGroups,
    PropertyGroupAlreadyExists,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverwritePropertyGroupArg {
    pub path: String,
    pub property_groups: Vec<PropertyGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum InvalidPropertyGroupError {
    TemplateNotFound { template_not_found: String },
    RestrictedContent,
    Path { path: LookupError },
    UnsupportedFolder,
    PropertyFieldTooLarge,
    DoesNotFitTemplate,
    DuplicatePropertyGroups,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovePropertiesArg {
    pub path: String,
    pub property_template_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RemovePropertiesError {
    TemplateNotFound { template_not_found: String },
    RestrictedContent,
    Path { path: LookupError },
    UnsupportedFolder,
    PropertyGroupLookup { property_group_lookup: LookUpPropertiesError },
    #[serde(other)]
    Other,
}

/// Changes to one property group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroupUpdate {
    pub template_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_or_update_fields: Option<Vec<PropertyField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePropertiesArg {
    pub path: String,
    pub update_property_groups: Vec<PropertyGroupUpdate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum UpdatePropertiesError {
    TemplateNotFound { template_not_found: String },
    RestrictedContent,
    Path { path: LookupError },
    UnsupportedFolder,
    PropertyFieldTooLarge,
    DoesNotFitTemplate,
    DuplicatePropertyGroups,
    PropertyGroupLookup { property_group_lookup: LookUpPropertiesError },
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PropertiesSearchMode {
    /// Match values of the named field.
    FieldName { field_name: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LogicalOperator {
    OrOperator,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum TemplateFilter {
    FilterSome { filter_some: Vec<String> },
    FilterNone,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertiesSearchQuery {
    pub query: String,
    pub mode: PropertiesSearchMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_operator: Option<LogicalOperator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertiesSearchArg {
    pub queries: Vec<PropertiesSearchQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_filter: Option<TemplateFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertiesSearchMatch {
    pub id: String,
    pub path: String,
    pub is_deleted: bool,
    pub property_groups: Vec<PropertyGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertiesSearchResult {
    pub matches: Vec<PropertiesSearchMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PropertiesSearchError {
    PropertyGroupLookup { property_group_lookup: LookUpPropertiesError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertiesSearchContinueArg {
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PropertiesSearchContinueError {
    Reset,
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTemplateArg {
    pub name: String,
    pub description: String,
    pub fields: Vec<PropertyFieldTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTemplateResult {
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTemplateArg {
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTemplateResult {
    pub name: String,
    pub description: String,
    pub fields: Vec<PropertyFieldTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTemplateResult {
    pub template_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveTemplateArg {
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTemplateArg {
    pub template_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_fields: Option<Vec<PropertyFieldTemplate>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTemplateResult {
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum TemplateError {
    TemplateNotFound { template_not_found: String },
    RestrictedContent,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ModifyTemplateError {
    TemplateNotFound { template_not_found: String },
    RestrictedContent,
    ConflictingPropertyNames,
    TooManyProperties,
    TooManyTemplates,
    TemplateAttributeTooLarge,
    #[serde(other)]
    Other,
}

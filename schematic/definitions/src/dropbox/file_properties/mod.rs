//! The `file_properties` namespace: custom metadata attached to files.
//!
//! Template routes exist in a `_for_user` and a `_for_team` flavour; the team
//! ones require a team-linked token.

mod types;

pub use types::*;

use schematic::response::{EmptyFormat, JsonFormat};

schematic::routes! {
    namespace = "file_properties";

    /// Adds property groups to a file.
    rpc PropertiesAdd => "properties/add" {
        host: Api,
        auth: [User],
        arg: AddPropertiesArg,
        result: EmptyFormat,
        error: AddPropertiesError,
    }

    /// Replaces a file's property groups with the given ones.
    rpc PropertiesOverwrite => "properties/overwrite" {
        host: Api,
        auth: [User],
        arg: OverwritePropertyGroupArg,
        result: EmptyFormat,
        error: InvalidPropertyGroupError,
    }

    /// Removes property groups from a file by template id.
    rpc PropertiesRemove => "properties/remove" {
        host: Api,
        auth: [User],
        arg: RemovePropertiesArg,
        result: EmptyFormat,
        error: RemovePropertiesError,
    }

    /// Searches across property field values.
    rpc PropertiesSearch => "properties/search" {
        host: Api,
        auth: [User],
        arg: PropertiesSearchArg,
        result: JsonFormat<PropertiesSearchResult>,
        error: PropertiesSearchError,
    }

    rpc PropertiesSearchContinue => "properties/search/continue" {
        host: Api,
        auth: [User],
        arg: PropertiesSearchContinueArg,
        result: JsonFormat<PropertiesSearchResult>,
        error: PropertiesSearchContinueError,
    }

    /// Adds, updates or removes fields within existing property groups.
    rpc PropertiesUpdate => "properties/update" {
        host: Api,
        auth: [User],
        arg: UpdatePropertiesArg,
        result: EmptyFormat,
        error: UpdatePropertiesError,
    }

    /// Adds a template owned by the team.
    rpc TemplatesAddForTeam => "templates/add_for_team" {
        host: Api,
        auth: [Team],
        arg: AddTemplateArg,
        result: JsonFormat<AddTemplateResult>,
        error: ModifyTemplateError,
    }

    /// Adds a template owned by the user.
    rpc TemplatesAddForUser => "templates/add_for_user" {
        host: Api,
        auth: [User],
        arg: AddTemplateArg,
        result: JsonFormat<AddTemplateResult>,
        error: ModifyTemplateError,
    }

    rpc TemplatesGetForTeam => "templates/get_for_team" {
        host: Api,
        auth: [Team],
        arg: GetTemplateArg,
        result: JsonFormat<GetTemplateResult>,
        error: TemplateError,
    }

    rpc TemplatesGetForUser => "templates/get_for_user" {
        host: Api,
        auth: [User],
        arg: GetTemplateArg,
        result: JsonFormat<GetTemplateResult>,
        error: TemplateError,
    }

    /// Lists template ids owned by the team. Takes no argument.
    rpc TemplatesListForTeam => "templates/list_for_team" {
        host: Api,
        auth: [Team],
        arg: (),
        result: JsonFormat<ListTemplateResult>,
        error: TemplateError,
    }

    /// Lists template ids owned by the user. Takes no argument.
    rpc TemplatesListForUser => "templates/list_for_user" {
        host: Api,
        auth: [User],
        arg: (),
        result: JsonFormat<ListTemplateResult>,
        error: TemplateError,
    }

    /// Permanently removes a team template and every property group using it.
    rpc TemplatesRemoveForTeam => "templates/remove_for_team" {
        host: Api,
        auth: [Team],
        arg: RemoveTemplateArg,
        result: EmptyFormat,
        error: TemplateError,
    }

    /// Permanently removes a user template and every property group using it.
    rpc TemplatesRemoveForUser => "templates/remove_for_user" {
        host: Api,
        auth: [User],
        arg: RemoveTemplateArg,
        result: EmptyFormat,
        error: TemplateError,
    }

    rpc TemplatesUpdateForTeam => "templates/update_for_team" {
        host: Api,
        auth: [Team],
        arg: UpdateTemplateArg,
        result: JsonFormat<UpdateTemplateResult>,
        error: ModifyTemplateError,
    }

    rpc TemplatesUpdateForUser => "templates/update_for_user" {
        host: Api,
        auth: [User],
        arg: UpdateTemplateArg,
        result: JsonFormat<UpdateTemplateResult>,
        error: ModifyTemplateError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schematic::route::Route;
    use schematic::{AuthClass, AuthSet, validate_routes};

    #[test]
    fn route_table_is_valid() {
        assert_eq!(ROUTES.len(), 16);
        assert_eq!(validate_routes(ROUTES), Ok(()));
        assert!(ROUTES.iter().all(|r| !r.is_deprecated()));
    }

    #[test]
    fn team_templates_need_team_auth() {
        for route in ROUTES {
            let expected = if route.path.ends_with("_for_team") {
                AuthSet::team()
            } else {
                AuthSet::user()
            };
            assert_eq!(route.auth, expected, "{route}");
        }
        assert!(TemplatesListForTeam::DESCRIPTOR.auth.contains(AuthClass::Team));
    }

    #[test]
    fn argless_routes_send_null() {
        let arg: <TemplatesListForUser as Route>::Arg = ();
        assert_eq!(serde_json::to_string(&arg).unwrap(), "null");
    }
}

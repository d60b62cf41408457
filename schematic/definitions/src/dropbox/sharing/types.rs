//! Sharing argument, result and error records.
//!
//! Unions decode with a `.tag` discriminator. Error and status unions carry an
//! `Other` catch-all for tags added on the server after this crate was built.
//! [`SharedLinkMetadata`] is the one polymorphic result decoded through
//! [`TaggedUnion`], so its unknown subtypes surface as
//! [`SharedLinkMetadata::Unspecified`].

use schematic::response::{TaggedUnion, TaggedUnionEnvelope, deserialize_union};
use serde::{Deserialize, Deserializer, Serialize};

use crate::dropbox::async_job::LaunchEmptyResult;

// ---------------------------------------------------------------------------
// Shared building blocks
// ---------------------------------------------------------------------------

/// Access a member has to a shared file or folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum AccessLevel {
    Owner,
    Editor,
    Viewer,
    ViewerNoComment,
    Traverse,
    NoAccess,
    #[serde(other)]
    Other,
}

/// Identifies a member by Dropbox id or email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MemberSelector {
    DropboxId { dropbox_id: String },
    Email { email: String },
    #[serde(other)]
    Other,
}

impl MemberSelector {
    /// Selects a member by email address.
    pub fn email(email: impl Into<String>) -> Self {
        Self::Email {
            email: email.into(),
        }
    }

    /// Selects a member by Dropbox account or team member id.
    pub fn dropbox_id(id: impl Into<String>) -> Self {
        Self::DropboxId {
            dropbox_id: id.into(),
        }
    }
}

/// A user with access to shared content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub account_id: String,
    pub email: String,
    pub display_name: String,
    /// Whether the user belongs to the caller's team.
    pub same_team: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<String>,
}

/// Someone invited to shared content who has not joined yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum InviteeInfo {
    Email { email: String },
    #[serde(other)]
    Other,
}

/// A Dropbox team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// Lookup failure for a path in the user's Dropbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LookupError {
    MalformedPath {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        malformed_path: Option<String>,
    },
    NotFound,
    NotFile,
    NotFolder,
    RestrictedContent,
    UnsupportedContentType,
    Locked,
    #[serde(other)]
    Other,
}

/// Errors tied to the calling user's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharingUserError {
    /// The user must verify their email address first.
    EmailUnverified,
    #[serde(other)]
    Other,
}

/// Errors accessing a shared file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharingFileAccessError {
    NoPermission,
    InvalidFile,
    IsFolder,
    InsidePublicFolder,
    InsideOsxPackage,
    #[serde(other)]
    Other,
}

/// Errors accessing a shared folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharedFolderAccessError {
    InvalidId,
    NotAMember,
    InvalidMember,
    EmailUnverified,
    Unmounted,
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Policies and permissions
// ---------------------------------------------------------------------------

/// Who can add and remove members of a shared folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum AclUpdatePolicy {
    Owner,
    Editors,
    #[serde(other)]
    Other,
}

/// Who can be a member of a shared folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MemberPolicy {
    Team,
    Anyone,
    #[serde(other)]
    Other,
}

/// Who can open links to content inside a shared folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharedLinkPolicy {
    Anyone,
    Team,
    Members,
    #[serde(other)]
    Other,
}

/// Whether viewer information is shown on shared content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ViewerInfoPolicy {
    Enabled,
    Disabled,
    #[serde(other)]
    Other,
}

/// Whether a folder inherits members from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum AccessInheritance {
    Inherit,
    NoInherit,
    #[serde(other)]
    Other,
}

/// Policies governing a shared folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderPolicy {
    pub acl_update_policy: AclUpdatePolicy,
    pub shared_link_policy: SharedLinkPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_policy: Option<MemberPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_member_policy: Option<MemberPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_info_policy: Option<ViewerInfoPolicy>,
}

/// Actions that may be taken on shared files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum FileAction {
    DisableViewerInfo,
    EditContents,
    EnableViewerInfo,
    InviteViewer,
    InviteViewerNoComment,
    InviteEditor,
    Unshare,
    RelinquishMembership,
    ShareLink,
    CreateLink,
    CreateViewLink,
    CreateEditLink,
    #[serde(other)]
    Other,
}

/// Actions that may be taken on shared folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum FolderAction {
    ChangeOptions,
    DisableViewerInfo,
    EditContents,
    EnableViewerInfo,
    InviteEditor,
    InviteViewer,
    InviteViewerNoComment,
    RelinquishMembership,
    Unmount,
    Unshare,
    LeaveACopy,
    ShareLink,
    CreateLink,
    SetAccessInheritance,
    #[serde(other)]
    Other,
}

/// Actions that may be taken on members of shared content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MemberAction {
    LeaveACopy,
    MakeEditor,
    MakeOwner,
    MakeViewer,
    MakeViewerNoComment,
    Remove,
    #[serde(other)]
    Other,
}

/// Why a permission was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PermissionDeniedReason {
    UserNotSameTeamAsOwner,
    UserNotAllowedByOwner,
    TargetIsIndirectMember,
    TargetIsOwner,
    TargetIsSelf,
    TargetNotActive,
    FolderIsLimitedTeamFolder,
    OwnerNotOnTeam,
    PermissionDenied,
    RestrictedByTeam,
    UserAccountType,
    UserNotOnTeam,
    FolderIsInsideSharedFolder,
    RestrictedByParentFolder,
    #[serde(other)]
    Other,
}

/// Whether the caller may perform an action on a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPermission {
    pub action: MemberAction,
    pub allow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<PermissionDeniedReason>,
}

/// Whether the caller may perform an action on a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePermission {
    pub action: FileAction,
    pub allow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<PermissionDeniedReason>,
}

/// Whether the caller may perform an action on a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderPermission {
    pub action: FolderAction,
    pub allow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<PermissionDeniedReason>,
}

/// Access granted through a parent folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentFolderAccessInfo {
    pub folder_name: String,
    pub shared_folder_id: String,
    pub permissions: Vec<MemberPermission>,
    pub path: String,
}

/// Access level a member ends up with after a change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAccessLevelResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_details: Option<Vec<ParentFolderAccessInfo>>,
}

// ---------------------------------------------------------------------------
// Shared links
// ---------------------------------------------------------------------------

/// Who a link is visible to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum Visibility {
    Public,
    TeamOnly,
    Password,
    TeamAndPassword,
    SharedFolderOnly,
    #[serde(other)]
    Other,
}

/// Visibility the link owner asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RequestedVisibility {
    Public,
    TeamOnly,
    Password,
}

/// Visibility actually in effect for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ResolvedVisibility {
    Public,
    TeamOnly,
    Password,
    TeamAndPassword,
    SharedFolderOnly,
    NoOne,
    OnlyYou,
    #[serde(other)]
    Other,
}

/// Audience a link is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LinkAudience {
    Public,
    Team,
    NoOne,
    Password,
    Members,
    #[serde(other)]
    Other,
}

/// Access level a link grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LinkAccessLevel {
    Viewer,
    Editor,
    #[serde(other)]
    Other,
}

/// Access level requested when creating or changing a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RequestedLinkAccessLevel {
    Viewer,
    Editor,
    Max,
    Default,
    #[serde(other)]
    Other,
}

/// Why the caller cannot revoke a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharedLinkAccessFailureReason {
    LoginRequired,
    EmailVerifyRequired,
    PasswordRequired,
    TeamOnly,
    OwnerOnly,
    #[serde(other)]
    Other,
}

/// What the caller may do with a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPermissions {
    pub can_revoke: bool,
    #[serde(default)]
    pub allow_download: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_visibility: Option<ResolvedVisibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_visibility: Option<RequestedVisibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoke_failure_reason: Option<SharedLinkAccessFailureReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_audience: Option<LinkAudience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_access_level: Option<LinkAccessLevel>,
}

/// Team member that owns a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberInfo {
    pub team_info: Team,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

/// Metadata of a shared link to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLinkMetadata {
    pub url: String,
    pub name: String,
    pub link_permissions: LinkPermissions,
    pub client_modified: String,
    pub server_modified: String,
    pub rev: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_info: Option<TeamMemberInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_owner_team_info: Option<Team>,
}

/// Metadata of a shared link to a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderLinkMetadata {
    pub url: String,
    pub name: String,
    pub link_permissions: LinkPermissions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_info: Option<TeamMemberInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_owner_team_info: Option<Team>,
}

/// Metadata of a shared link: exactly one of a file or a folder link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharedLinkMetadata {
    File(FileLinkMetadata),
    Folder(FolderLinkMetadata),
    /// A link subtype this client does not know.
    Unspecified,
}

impl SharedLinkMetadata {
    /// The link URL, when the subtype is known.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::File(file) => Some(&file.url),
            Self::Folder(folder) => Some(&folder.url),
            Self::Unspecified => None,
        }
    }

    /// The file metadata, for file links.
    pub fn file(&self) -> Option<&FileLinkMetadata> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// The folder metadata, for folder links.
    pub fn folder(&self) -> Option<&FolderLinkMetadata> {
        match self {
            Self::Folder(folder) => Some(folder),
            _ => None,
        }
    }
}

impl TaggedUnion for SharedLinkMetadata {
    const VARIANTS: &'static [&'static str] = &["file", "folder"];

    fn decode_variant(envelope: TaggedUnionEnvelope) -> Result<Self, serde_json::Error> {
        match envelope.tag.as_str() {
            "file" => envelope.project().map(Self::File),
            "folder" => envelope.project().map(Self::Folder),
            _ => Ok(Self::Unspecified),
        }
    }

    fn unspecified() -> Self {
        Self::Unspecified
    }
}

impl<'de> Deserialize<'de> for SharedLinkMetadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_union(deserializer)
    }
}

/// Metadata of a link returned by the legacy link routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathLinkMetadata {
    pub url: String,
    pub visibility: Visibility,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

/// Metadata of a link to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLinkMetadata {
    pub url: String,
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

/// A legacy link: a path link or a collection link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LinkMetadata {
    Path(PathLinkMetadata),
    Collection(CollectionLinkMetadata),
    #[serde(other)]
    Other,
}

/// Settings applied when creating or modifying a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedLinkSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_password: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<LinkAudience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<RequestedLinkAccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_visibility: Option<RequestedVisibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_download: Option<bool>,
}

/// Upload the link is created for before the file exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PendingUploadMode {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharedLinkSettingsError {
    InvalidSettings,
    NotAuthorized,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSharedLinkArg {
    pub path: String,
    #[serde(default)]
    pub short_url: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_upload: Option<PendingUploadMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum CreateSharedLinkError {
    Path { path: LookupError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSharedLinkWithSettingsArg {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SharedLinkSettings>,
}

impl CreateSharedLinkWithSettingsArg {
    /// Creates a link for `path` with the default settings.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            settings: None,
        }
    }
}

/// Metadata of the link that already exists for a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharedLinkAlreadyExistsMetadata {
    Metadata { metadata: SharedLinkMetadata },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum CreateSharedLinkWithSettingsError {
    Path {
        path: LookupError,
    },
    EmailNotVerified,
    SharedLinkAlreadyExists {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shared_link_already_exists: Option<SharedLinkAlreadyExistsMetadata>,
    },
    SettingsError {
        settings_error: SharedLinkSettingsError,
    },
    AccessDenied,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSharedLinkMetadataArg {
    pub url: String,
    /// Path of a file or folder inside a folder link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_password: Option<String>,
}

impl GetSharedLinkMetadataArg {
    /// Looks up the link at `url` itself.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            path: None,
            link_password: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharedLinkError {
    SharedLinkNotFound,
    SharedLinkAccessDenied,
    UnsupportedLinkType,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GetSharedLinkFileError {
    SharedLinkNotFound,
    SharedLinkAccessDenied,
    UnsupportedLinkType,
    /// Directories cannot be downloaded through this route.
    SharedLinkIsDirectory,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSharedLinksArg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSharedLinksResult {
    pub links: Vec<LinkMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GetSharedLinksError {
    Path {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSharedLinksArg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSharedLinksResult {
    pub links: Vec<SharedLinkMetadata>,
    pub has_more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListSharedLinksError {
    Path { path: LookupError },
    /// The cursor is stale; list again from the start.
    Reset,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifySharedLinkSettingsArgs {
    pub url: String,
    pub settings: SharedLinkSettings,
    #[serde(default)]
    pub remove_expiration: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ModifySharedLinkSettingsError {
    SharedLinkNotFound,
    SharedLinkAccessDenied,
    UnsupportedLinkType,
    SettingsError { settings_error: SharedLinkSettingsError },
    EmailNotVerified,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeSharedLinkArg {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RevokeSharedLinkError {
    SharedLinkNotFound,
    SharedLinkAccessDenied,
    UnsupportedLinkType,
    SharedLinkMalformed,
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Shared files
// ---------------------------------------------------------------------------

/// Properties of a file shared with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFileMetadata {
    pub id: String,
    pub name: String,
    pub policy: FolderPolicy,
    pub preview_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_type: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_display_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_team: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shared_folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<FilePermission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_invited: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFileMetadataArg {
    /// File id or path.
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FileAction>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GetFileMetadataError {
    UserError { user_error: SharingUserError },
    AccessError { access_error: SharingFileAccessError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFileMetadataBatchArg {
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FileAction>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GetFileMetadataIndividualResult {
    Metadata(SharedFileMetadata),
    AccessError { access_error: SharingFileAccessError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFileMetadataBatchResult {
    pub file: String,
    pub result: GetFileMetadataIndividualResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilesArg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FileAction>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilesContinueArg {
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilesResult {
    pub entries: Vec<SharedFileMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListFilesContinueError {
    UserError { user_error: SharingUserError },
    InvalidCursor,
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// File members
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFileMemberArgs {
    pub file: String,
    pub members: Vec<MemberSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
    #[serde(default)]
    pub add_message_as_comment: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum AddFileMemberError {
    UserError { user_error: SharingUserError },
    AccessError { access_error: SharingFileAccessError },
    RateLimit,
    InvalidComment,
    BannedMember,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum FileMemberActionError {
    InvalidMember,
    NoPermission,
    AccessError { access_error: SharingFileAccessError },
    NoExplicitAccess(MemberAccessLevelResult),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum FileMemberActionIndividualResult {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        success: Option<AccessLevel>,
    },
    MemberError {
        member_error: FileMemberActionError,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMemberActionResult {
    pub member: MemberSelector,
    pub result: FileMemberActionIndividualResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sckey_sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_signature: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum FileMemberRemoveActionResult {
    Success(MemberAccessLevelResult),
    MemberError { member_error: FileMemberActionError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFileMemberArg {
    pub file: String,
    pub member: MemberSelector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RemoveFileMemberError {
    UserError { user_error: SharingUserError },
    AccessError { access_error: SharingFileAccessError },
    NoExplicitAccess(MemberAccessLevelResult),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFileMemberArgs {
    pub file: String,
    pub member: MemberSelector,
    pub access_level: AccessLevel,
}

/// A user with access to a shared file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFileMembershipInfo {
    pub access_type: AccessLevel,
    pub user: UserInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<MemberPermission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default)]
    pub is_inherited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_last_seen: Option<String>,
}

/// A user with access to a shared folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMembershipInfo {
    pub access_type: AccessLevel,
    pub user: UserInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<MemberPermission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default)]
    pub is_inherited: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupManagementType {
    UserManaged,
    CompanyManaged,
    SystemManaged,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupType {
    Team,
    UserManaged,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub group_name: String,
    pub group_id: String,
    pub group_management_type: GroupManagementType,
    pub group_type: GroupType,
    pub is_member: bool,
    pub is_owner: bool,
    pub same_team: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
}

/// A group with access to shared content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembershipInfo {
    pub access_type: AccessLevel,
    pub group: GroupInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<MemberPermission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default)]
    pub is_inherited: bool,
}

/// An invitee to shared content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteeMembershipInfo {
    pub access_type: AccessLevel,
    pub invitee: InviteeInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<MemberPermission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default)]
    pub is_inherited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFileMembers {
    pub users: Vec<UserFileMembershipInfo>,
    pub groups: Vec<GroupMembershipInfo>,
    pub invitees: Vec<InviteeMembershipInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFileMembersArg {
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<MemberAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_inherited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListFileMembersError {
    UserError { user_error: SharingUserError },
    AccessError { access_error: SharingFileAccessError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFileMembersBatchArg {
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFileMembersCountResult {
    pub members: SharedFileMembers,
    pub member_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListFileMembersIndividualResult {
    Result(ListFileMembersCountResult),
    AccessError { access_error: SharingFileAccessError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFileMembersBatchResult {
    pub file: String,
    pub result: ListFileMembersIndividualResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFileMembersContinueArg {
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListFileMembersContinueError {
    UserError { user_error: SharingUserError },
    AccessError { access_error: SharingFileAccessError },
    InvalidCursor,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelinquishFileMembershipArg {
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RelinquishFileMembershipError {
    AccessError { access_error: SharingFileAccessError },
    /// Access comes through a group and cannot be relinquished individually.
    GroupAccess,
    NoPermission,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnshareFileArg {
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum UnshareFileError {
    UserError { user_error: SharingUserError },
    AccessError { access_error: SharingFileAccessError },
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Shared folders
// ---------------------------------------------------------------------------

/// Properties of a shared folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFolderMetadata {
    pub access_type: AccessLevel,
    pub is_inside_team_folder: bool,
    pub is_team_folder: bool,
    pub name: String,
    pub policy: FolderPolicy,
    pub preview_url: String,
    pub shared_folder_id: String,
    pub time_invited: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_display_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_team: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shared_folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_folder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<FolderPermission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_inheritance: Option<AccessInheritance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMetadataArgs {
    pub shared_folder_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FolderAction>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFoldersArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FolderAction>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFoldersContinueArg {
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFoldersResult {
    pub entries: Vec<SharedFolderMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListFoldersContinueError {
    InvalidCursor,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFolderMembers {
    pub users: Vec<UserMembershipInfo>,
    pub groups: Vec<GroupMembershipInfo>,
    pub invitees: Vec<InviteeMembershipInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderMembersArgs {
    pub shared_folder_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<MemberAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderMembersContinueArg {
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListFolderMembersContinueError {
    AccessError { access_error: SharedFolderAccessError },
    InvalidCursor,
    #[serde(other)]
    Other,
}

/// A member to add to a shared folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMember {
    pub member: MemberSelector,
    pub access_level: AccessLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFolderMemberArg {
    pub shared_folder_id: String,
    pub members: Vec<AddMember>,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum AddMemberSelectorError {
    AutomaticGroup,
    InvalidDropboxId { invalid_dropbox_id: String },
    InvalidEmail { invalid_email: String },
    UnverifiedDropboxId { unverified_dropbox_id: String },
    GroupDeleted,
    GroupNotOnTeam,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum AddFolderMemberError {
    AccessError { access_error: SharedFolderAccessError },
    EmailUnverified,
    BannedMember,
    BadMember { bad_member: AddMemberSelectorError },
    CantShareOutsideTeam,
    TooManyMembers { too_many_members: u64 },
    TooManyPendingInvites { too_many_pending_invites: u64 },
    RateLimit,
    TooManyInvitees,
    InsufficientPlan,
    TeamFolder,
    NoPermission,
    InvalidSharedFolder,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharedFolderMemberError {
    InvalidDropboxId,
    NotAMember,
    NoExplicitAccess(MemberAccessLevelResult),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFolderMemberArg {
    pub shared_folder_id: String,
    pub member: MemberSelector,
    pub leave_a_copy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RemoveFolderMemberError {
    AccessError { access_error: SharedFolderAccessError },
    MemberError { member_error: SharedFolderMemberError },
    FolderOwner,
    GroupAccess,
    TeamFolder,
    NoPermission,
    TooManyFiles,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFolderMemberArg {
    pub shared_folder_id: String,
    pub member: MemberSelector,
    pub access_level: AccessLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum UpdateFolderMemberError {
    AccessError { access_error: SharedFolderAccessError },
    MemberError { member_error: SharedFolderMemberError },
    NoExplicitAccess { no_explicit_access: AddFolderMemberError },
    InsufficientPlan,
    NoPermission,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountFolderArg {
    pub shared_folder_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsufficientQuotaAmounts {
    pub space_needed: u64,
    pub space_shortage: u64,
    pub space_left: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MountFolderError {
    AccessError { access_error: SharedFolderAccessError },
    InsideSharedFolder,
    InsufficientQuota(InsufficientQuotaAmounts),
    AlreadyMounted,
    NoPermission,
    NotMountable,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmountFolderArg {
    pub shared_folder_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum UnmountFolderError {
    AccessError { access_error: SharedFolderAccessError },
    NoPermission,
    NotUnmountable,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelinquishFolderMembershipArg {
    pub shared_folder_id: String,
    #[serde(default)]
    pub leave_a_copy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RelinquishFolderMembershipError {
    AccessError { access_error: SharedFolderAccessError },
    FolderOwner,
    Mounted,
    GroupAccess,
    TeamFolder,
    NoPermission,
    NoExplicitAccess,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareFolderArg {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl_update_policy: Option<AclUpdatePolicy>,
    #[serde(default)]
    pub force_async: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_policy: Option<MemberPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_link_policy: Option<SharedLinkPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_info_policy: Option<ViewerInfoPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_inheritance: Option<AccessInheritance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FolderAction>>,
}

impl ShareFolderArg {
    /// Shares the folder at `path` with the default policies.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            acl_update_policy: None,
            force_async: false,
            member_policy: None,
            shared_link_policy: None,
            viewer_info_policy: None,
            access_inheritance: None,
            actions: None,
        }
    }
}

/// Result of sharing a folder or changing its inheritance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ShareFolderLaunch {
    AsyncJobId { async_job_id: String },
    Complete(SharedFolderMetadata),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SharePathError {
    IsFile,
    InsideSharedFolder,
    ContainsSharedFolder,
    ContainsAppFolder,
    ContainsTeamFolder,
    IsAppFolder,
    InsideAppFolder,
    IsPublicFolder,
    InsidePublicFolder,
    AlreadyShared(SharedFolderMetadata),
    InvalidPath,
    IsOsxPackage,
    InsideOsxPackage,
    IsVault,
    IsVaultLocked,
    IsFamily,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ShareFolderError {
    EmailUnverified,
    BadPath { bad_path: SharePathError },
    TeamPolicyDisallowsMemberPolicy,
    DisallowedSharedLinkPolicy,
    NoPermission,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAccessInheritanceArg {
    pub shared_folder_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_inheritance: Option<AccessInheritance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum SetAccessInheritanceError {
    AccessError { access_error: SharedFolderAccessError },
    NoPermission,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFolderArg {
    pub shared_folder_id: String,
    pub to_dropbox_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum TransferFolderError {
    AccessError { access_error: SharedFolderAccessError },
    InvalidDropboxId,
    NewOwnerNotAMember,
    NewOwnerUnmounted,
    NewOwnerEmailUnverified,
    TeamFolder,
    NoPermission,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnshareFolderArg {
    pub shared_folder_id: String,
    #[serde(default)]
    pub leave_a_copy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum UnshareFolderError {
    AccessError { access_error: SharedFolderAccessError },
    TeamFolder,
    NoPermission,
    TooManyFiles,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFolderPolicyArg {
    pub shared_folder_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_policy: Option<MemberPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl_update_policy: Option<AclUpdatePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_info_policy: Option<ViewerInfoPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_link_policy: Option<SharedLinkPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FolderAction>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum UpdateFolderPolicyError {
    AccessError { access_error: SharedFolderAccessError },
    NotOnTeam,
    TeamPolicyDisallowsMemberPolicy,
    DisallowedSharedLinkPolicy,
    NoPermission,
    TeamFolder,
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Background jobs
// ---------------------------------------------------------------------------

/// Why a sharing job failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum JobError {
    UnshareFolderError {
        unshare_folder_error: UnshareFolderError,
    },
    RemoveFolderMemberError {
        remove_folder_member_error: RemoveFolderMemberError,
    },
    RelinquishFolderMembershipError {
        relinquish_folder_membership_error: RelinquishFolderMembershipError,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum JobStatus {
    InProgress,
    Complete,
    Failed { failed: JobError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum RemoveMemberJobStatus {
    InProgress,
    Complete(MemberAccessLevelResult),
    Failed { failed: RemoveFolderMemberError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ShareFolderJobStatus {
    InProgress,
    Complete(SharedFolderMetadata),
    Failed { failed: ShareFolderError },
    #[serde(other)]
    Other,
}

impl From<LaunchEmptyResult> for JobStatus {
    fn from(launch: LaunchEmptyResult) -> Self {
        match launch {
            LaunchEmptyResult::AsyncJobId { .. } => Self::InProgress,
            LaunchEmptyResult::Complete => Self::Complete,
            LaunchEmptyResult::Other => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file_link() -> serde_json::Value {
        json!({
            ".tag": "file",
            "url": "https://www.dropbox.com/s/2sn712vy1ovegw8/Prime_Numbers.txt?dl=0",
            "name": "Prime_Numbers.txt",
            "link_permissions": {
                "can_revoke": false,
                "allow_download": true,
                "resolved_visibility": {".tag": "public"},
                "revoke_failure_reason": {".tag": "owner_only"}
            },
            "client_modified": "2015-05-12T15:50:38Z",
            "server_modified": "2015-05-12T15:50:38Z",
            "rev": "a1c10ce0dd78",
            "size": 7212,
            "id": "id:a4ayc_80_OEAAAAAAAAAXw",
            "path_lower": "/homework/math/prime_numbers.txt",
            "team_member_info": {
                "team_info": {"id": "dbtid:AAFdgehTzw7WlXhZJsbGCLePe8RvQGYDr-I", "name": "Acme, Inc."},
                "display_name": "Roger Rabbit",
                "member_id": "dbmid:abcd1234"
            }
        })
    }

    #[test]
    fn file_link_round_trips() {
        let value = file_link();
        let link: SharedLinkMetadata = serde_json::from_value(value.clone()).unwrap();

        let file = link.file().expect("file variant");
        assert_eq!(file.size, 7212);
        assert!(link.folder().is_none());

        assert_eq!(serde_json::to_value(&link).unwrap(), value);
    }

    #[test]
    fn folder_tag_selects_folder_only() {
        let link: SharedLinkMetadata = serde_json::from_value(json!({
            ".tag": "folder",
            "url": "https://www.dropbox.com/sh/s6fvw6ol7rmqo1x/AAAgWRSbjmYDvPpDB30Sykjfa?dl=0",
            "name": "Math",
            "link_permissions": {"can_revoke": false, "allow_download": true},
            "id": "id:a4ayc_80_OEAAAAAAAAAXw",
            "path_lower": "/homework/math"
        }))
        .unwrap();

        assert!(link.file().is_none());
        assert_eq!(link.folder().map(|f| f.name.as_str()), Some("Math"));
        assert_eq!(
            link.url(),
            Some("https://www.dropbox.com/sh/s6fvw6ol7rmqo1x/AAAgWRSbjmYDvPpDB30Sykjfa?dl=0")
        );
    }

    #[test]
    fn unknown_link_subtype_is_unspecified() {
        let link: SharedLinkMetadata =
            serde_json::from_value(json!({".tag": "collection", "url": "https://db.tt/c"}))
                .unwrap();
        assert_eq!(link, SharedLinkMetadata::Unspecified);
        assert_eq!(link.url(), None);
    }

    #[test]
    fn malformed_file_link_fails() {
        let result: Result<SharedLinkMetadata, _> =
            serde_json::from_value(json!({".tag": "file", "url": "https://db.tt/x"}));
        assert!(result.is_err());
    }

    #[test]
    fn nested_union_list_decodes_each_link() {
        let result: ListSharedLinksResult = serde_json::from_value(json!({
            "links": [file_link(), {".tag": "mystery"}],
            "has_more": false
        }))
        .unwrap();

        assert!(result.links[0].file().is_some());
        assert_eq!(result.links[1], SharedLinkMetadata::Unspecified);
    }

    #[test]
    fn error_union_with_nested_payload() {
        let err: AddFolderMemberError = serde_json::from_value(json!({
            ".tag": "bad_member",
            "bad_member": {".tag": "invalid_email", "invalid_email": "not-an-email"}
        }))
        .unwrap();

        assert_eq!(
            err,
            AddFolderMemberError::BadMember {
                bad_member: AddMemberSelectorError::InvalidEmail {
                    invalid_email: "not-an-email".to_string()
                }
            }
        );
    }

    #[test]
    fn struct_payload_variant_is_inlined() {
        let status: RemoveMemberJobStatus = serde_json::from_value(json!({
            ".tag": "complete",
            "access_level": {".tag": "viewer"},
            "warning": "The member still has access through a group."
        }))
        .unwrap();

        match status {
            RemoveMemberJobStatus::Complete(result) => {
                assert_eq!(result.access_level, Some(AccessLevel::Viewer));
                assert!(result.warning.is_some());
            }
            other => panic!("expected complete, got {other:?}"),
        }
    }

    #[test]
    fn member_selector_wire_shape() {
        let value = serde_json::to_value(MemberSelector::email("justin@example.com")).unwrap();
        assert_eq!(value, json!({".tag": "email", "email": "justin@example.com"}));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let value = serde_json::to_value(CreateSharedLinkWithSettingsArg::new("/Prime_Numbers.txt"))
            .unwrap();
        assert_eq!(value, json!({"path": "/Prime_Numbers.txt"}));
    }

    #[test]
    fn launch_result_converts_to_job_status() {
        assert_eq!(
            JobStatus::from(LaunchEmptyResult::Complete),
            JobStatus::Complete
        );
        assert_eq!(
            JobStatus::from(LaunchEmptyResult::AsyncJobId {
                async_job_id: "dbjid:1".into()
            }),
            JobStatus::InProgress
        );
    }
}

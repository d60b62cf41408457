//! The `sharing` namespace: shared links, shared files and shared folders.
//!
//! Every route is a zero-sized type usable with [`schematic::Client`]:
//!
//! ```rust,ignore
//! use schematic_definitions::dropbox::sharing::{GetSharedLinkMetadata, GetSharedLinkMetadataArg};
//!
//! let link = client
//!     .call::<GetSharedLinkMetadata>(&GetSharedLinkMetadataArg::new("https://db.tt/abc"))
//!     .await?;
//! ```

mod types;

pub use types::*;

use schematic::Deprecation;
use schematic::error::Void;
use schematic::response::{EmptyFormat, JsonFormat, UnionFormat};

use crate::dropbox::async_job::{LaunchEmptyResult, LaunchResultBase, PollArg, PollError};

schematic::routes! {
    namespace = "sharing";

    /// Adds specified members to a file.
    rpc AddFileMember => "add_file_member" {
        host: Api,
        auth: [User],
        arg: AddFileMemberArgs,
        result: JsonFormat<Vec<FileMemberActionResult>>,
        error: AddFileMemberError,
    }

    /// Allows an owner or editor of a shared folder to add another member.
    rpc AddFolderMember => "add_folder_member" {
        host: Api,
        auth: [User],
        arg: AddFolderMemberArg,
        result: EmptyFormat,
        error: AddFolderMemberError,
    }

    /// Returns the status of an asynchronous job.
    rpc CheckJobStatus => "check_job_status" {
        host: Api,
        auth: [User],
        arg: PollArg,
        result: JsonFormat<JobStatus>,
        error: PollError,
    }

    /// Returns the status of an asynchronous job for sharing a folder.
    rpc CheckRemoveMemberJobStatus => "check_remove_member_job_status" {
        host: Api,
        auth: [User],
        arg: PollArg,
        result: JsonFormat<RemoveMemberJobStatus>,
        error: PollError,
    }

    /// Returns the status of an asynchronous job for sharing a folder.
    rpc CheckShareJobStatus => "check_share_job_status" {
        host: Api,
        auth: [User],
        arg: PollArg,
        result: JsonFormat<ShareFolderJobStatus>,
        error: PollError,
    }

    /// Creates a shared link. Superseded by [`CreateSharedLinkWithSettings`].
    rpc CreateSharedLink => "create_shared_link" {
        host: Api,
        auth: [User],
        arg: CreateSharedLinkArg,
        result: JsonFormat<PathLinkMetadata>,
        error: CreateSharedLinkError,
        deprecated: Deprecation::replaced_by("CreateSharedLinkWithSettings"),
    }

    /// Creates a shared link with custom settings.
    rpc CreateSharedLinkWithSettings => "create_shared_link_with_settings" {
        host: Api,
        auth: [User],
        arg: CreateSharedLinkWithSettingsArg,
        result: UnionFormat<SharedLinkMetadata>,
        error: CreateSharedLinkWithSettingsError,
    }

    /// Returns shared file metadata.
    rpc GetFileMetadata => "get_file_metadata" {
        host: Api,
        auth: [User],
        arg: GetFileMetadataArg,
        result: JsonFormat<SharedFileMetadata>,
        error: GetFileMetadataError,
    }

    /// Returns shared file metadata for up to 100 files.
    rpc GetFileMetadataBatch => "get_file_metadata/batch" {
        host: Api,
        auth: [User],
        arg: GetFileMetadataBatchArg,
        result: JsonFormat<Vec<GetFileMetadataBatchResult>>,
        error: SharingUserError,
    }

    /// Returns shared folder metadata by its folder ID.
    rpc GetFolderMetadata => "get_folder_metadata" {
        host: Api,
        auth: [User],
        arg: GetMetadataArgs,
        result: JsonFormat<SharedFolderMetadata>,
        error: SharedFolderAccessError,
    }

    /// Downloads the shared link's file from a user's Dropbox.
    download GetSharedLinkFile => "get_shared_link_file" {
        host: Content,
        auth: [User],
        arg: GetSharedLinkMetadataArg,
        result: UnionFormat<SharedLinkMetadata>,
        error: GetSharedLinkFileError,
    }

    /// Returns the shared link's metadata.
    rpc GetSharedLinkMetadata => "get_shared_link_metadata" {
        host: Api,
        auth: [App, User],
        arg: GetSharedLinkMetadataArg,
        result: UnionFormat<SharedLinkMetadata>,
        error: SharedLinkError,
    }

    /// Returns a list of links to the current user's Dropbox. Superseded by [`ListSharedLinks`].
    rpc GetSharedLinks => "get_shared_links" {
        host: Api,
        auth: [User],
        arg: GetSharedLinksArg,
        result: JsonFormat<GetSharedLinksResult>,
        error: GetSharedLinksError,
        deprecated: Deprecation::replaced_by("ListSharedLinks"),
    }

    /// Lists the members of a file that was shared with the caller.
    rpc ListFileMembers => "list_file_members" {
        host: Api,
        auth: [User],
        arg: ListFileMembersArg,
        result: JsonFormat<SharedFileMembers>,
        error: ListFileMembersError,
    }

    /// Lists members of up to 100 files.
    rpc ListFileMembersBatch => "list_file_members/batch" {
        host: Api,
        auth: [User],
        arg: ListFileMembersBatchArg,
        result: JsonFormat<Vec<ListFileMembersBatchResult>>,
        error: SharingUserError,
    }

    /// Pages through file members after [`ListFileMembers`] or [`ListFileMembersBatch`].
    rpc ListFileMembersContinue => "list_file_members/continue" {
        host: Api,
        auth: [User],
        arg: ListFileMembersContinueArg,
        result: JsonFormat<SharedFileMembers>,
        error: ListFileMembersContinueError,
    }

    /// Returns shared folder membership by its folder ID.
    rpc ListFolderMembers => "list_folder_members" {
        host: Api,
        auth: [User],
        arg: ListFolderMembersArgs,
        result: JsonFormat<SharedFolderMembers>,
        error: SharedFolderAccessError,
    }

    /// Pages through folder members after [`ListFolderMembers`].
    rpc ListFolderMembersContinue => "list_folder_members/continue" {
        host: Api,
        auth: [User],
        arg: ListFolderMembersContinueArg,
        result: JsonFormat<SharedFolderMembers>,
        error: ListFolderMembersContinueError,
    }

    /// Returns all shared folders the current user has access to.
    rpc ListFolders => "list_folders" {
        host: Api,
        auth: [User],
        arg: ListFoldersArgs,
        result: JsonFormat<ListFoldersResult>,
        error: Void,
    }

    /// Pages through shared folders after [`ListFolders`].
    rpc ListFoldersContinue => "list_folders/continue" {
        host: Api,
        auth: [User],
        arg: ListFoldersContinueArg,
        result: JsonFormat<ListFoldersResult>,
        error: ListFoldersContinueError,
    }

    /// Returns all shared folders the current user can mount or unmount.
    rpc ListMountableFolders => "list_mountable_folders" {
        host: Api,
        auth: [User],
        arg: ListFoldersArgs,
        result: JsonFormat<ListFoldersResult>,
        error: Void,
    }

    rpc ListMountableFoldersContinue => "list_mountable_folders/continue" {
        host: Api,
        auth: [User],
        arg: ListFoldersContinueArg,
        result: JsonFormat<ListFoldersResult>,
        error: ListFoldersContinueError,
    }

    /// Returns a list of all files shared with the current user.
    rpc ListReceivedFiles => "list_received_files" {
        host: Api,
        auth: [User],
        arg: ListFilesArg,
        result: JsonFormat<ListFilesResult>,
        error: SharingUserError,
    }

    rpc ListReceivedFilesContinue => "list_received_files/continue" {
        host: Api,
        auth: [User],
        arg: ListFilesContinueArg,
        result: JsonFormat<ListFilesResult>,
        error: ListFilesContinueError,
    }

    /// Lists shared links of this user, optionally for one path.
    rpc ListSharedLinks => "list_shared_links" {
        host: Api,
        auth: [User],
        arg: ListSharedLinksArg,
        result: JsonFormat<ListSharedLinksResult>,
        error: ListSharedLinksError,
    }

    /// Modifies the settings of an existing shared link.
    rpc ModifySharedLinkSettings => "modify_shared_link_settings" {
        host: Api,
        auth: [User],
        arg: ModifySharedLinkSettingsArgs,
        result: UnionFormat<SharedLinkMetadata>,
        error: ModifySharedLinkSettingsError,
    }

    /// Mounts a shared folder the user was invited to.
    rpc MountFolder => "mount_folder" {
        host: Api,
        auth: [User],
        arg: MountFolderArg,
        result: JsonFormat<SharedFolderMetadata>,
        error: MountFolderError,
    }

    /// The current user relinquishes their membership in the designated file.
    rpc RelinquishFileMembership => "relinquish_file_membership" {
        host: Api,
        auth: [User],
        arg: RelinquishFileMembershipArg,
        result: EmptyFormat,
        error: RelinquishFileMembershipError,
    }

    /// The current user relinquishes their membership in the designated shared folder.
    rpc RelinquishFolderMembership => "relinquish_folder_membership" {
        host: Api,
        auth: [User],
        arg: RelinquishFolderMembershipArg,
        result: JsonFormat<LaunchEmptyResult>,
        error: RelinquishFolderMembershipError,
    }

    /// Removes a member from a file. Superseded by [`RemoveFileMember2`].
    rpc RemoveFileMember => "remove_file_member" {
        host: Api,
        auth: [User],
        arg: RemoveFileMemberArg,
        result: JsonFormat<FileMemberActionIndividualResult>,
        error: RemoveFileMemberError,
        deprecated: Deprecation::replaced_by("RemoveFileMember2"),
    }

    /// Removes a specified member from the file.
    rpc RemoveFileMember2 => "remove_file_member_2" {
        host: Api,
        auth: [User],
        arg: RemoveFileMemberArg,
        result: JsonFormat<FileMemberRemoveActionResult>,
        error: RemoveFileMemberError,
    }

    /// Allows an owner or editor of a shared folder to remove another member.
    rpc RemoveFolderMember => "remove_folder_member" {
        host: Api,
        auth: [User],
        arg: RemoveFolderMemberArg,
        result: JsonFormat<LaunchResultBase>,
        error: RemoveFolderMemberError,
    }

    /// Revokes a shared link.
    rpc RevokeSharedLink => "revoke_shared_link" {
        host: Api,
        auth: [User],
        arg: RevokeSharedLinkArg,
        result: EmptyFormat,
        error: RevokeSharedLinkError,
    }

    /// Changes whether a folder inherits members from its parent.
    rpc SetAccessInheritance => "set_access_inheritance" {
        host: Api,
        auth: [User],
        arg: SetAccessInheritanceArg,
        result: JsonFormat<ShareFolderLaunch>,
        error: SetAccessInheritanceError,
    }

    /// Shares a folder with collaborators.
    rpc ShareFolder => "share_folder" {
        host: Api,
        auth: [User],
        arg: ShareFolderArg,
        result: JsonFormat<ShareFolderLaunch>,
        error: ShareFolderError,
    }

    /// Transfers ownership of a shared folder to a member of the shared folder.
    rpc TransferFolder => "transfer_folder" {
        host: Api,
        auth: [User],
        arg: TransferFolderArg,
        result: EmptyFormat,
        error: TransferFolderError,
    }

    /// The current user unmounts the designated folder.
    rpc UnmountFolder => "unmount_folder" {
        host: Api,
        auth: [User],
        arg: UnmountFolderArg,
        result: EmptyFormat,
        error: UnmountFolderError,
    }

    /// Removes all members from the file. Does not work for files under shared folders.
    rpc UnshareFile => "unshare_file" {
        host: Api,
        auth: [User],
        arg: UnshareFileArg,
        result: EmptyFormat,
        error: UnshareFileError,
    }

    /// Allows a shared folder owner to unshare the folder.
    rpc UnshareFolder => "unshare_folder" {
        host: Api,
        auth: [User],
        arg: UnshareFolderArg,
        result: JsonFormat<LaunchEmptyResult>,
        error: UnshareFolderError,
    }

    /// Changes a member's access on a shared file.
    rpc UpdateFileMember => "update_file_member" {
        host: Api,
        auth: [User],
        arg: UpdateFileMemberArgs,
        result: JsonFormat<MemberAccessLevelResult>,
        error: FileMemberActionError,
    }

    /// Allows an owner or editor of a shared folder to update another member's permissions.
    rpc UpdateFolderMember => "update_folder_member" {
        host: Api,
        auth: [User],
        arg: UpdateFolderMemberArg,
        result: JsonFormat<MemberAccessLevelResult>,
        error: UpdateFolderMemberError,
    }

    /// Updates the sharing policies for a shared folder.
    rpc UpdateFolderPolicy => "update_folder_policy" {
        host: Api,
        auth: [User],
        arg: UpdateFolderPolicyArg,
        result: JsonFormat<SharedFolderMetadata>,
        error: UpdateFolderPolicyError,
    }
}

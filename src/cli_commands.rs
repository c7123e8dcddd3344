use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use frontfiles::model::{FileId, FolderId, NodeRef};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and remember the authority and project (.frontfiles)
    Login(LoginArgs),

    /// Forget the stored session credentials
    Logout,

    /// Print the project's folder tree
    Tree(TreeArgs),

    /// Create a folder
    Mkdir(CreateArgs),

    /// Create a file with the placeholder body
    Touch(CreateArgs),

    /// Rename a folder or file
    Rename(RenameArgs),

    /// Move a folder or file into another folder
    #[command(name = "mv")]
    Mv(MoveArgs),

    /// Delete a folder (with everything in it) or a file
    #[command(name = "rm")]
    Rm(RemoveArgs),

    /// Print a file's content (or its draft)
    Cat(CatArgs),

    /// Replace a file's content from a file or stdin
    Write(WriteArgs),

    /// Replace a file's content with its draft
    ApplyDraft(FileArg),

    /// List the folders a node can legally be moved into
    Destinations(NodeArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum KindArg {
    Folder,
    File,
}

impl KindArg {
    pub(crate) fn node(self, id: u64) -> NodeRef {
        match self {
            KindArg::Folder => NodeRef::Folder(FolderId(id)),
            KindArg::File => NodeRef::File(FileId(id)),
        }
    }
}

#[derive(Args)]
pub(crate) struct LoginArgs {
    /// Authority base URL
    #[arg(long)]
    pub(crate) url: String,
    /// Project id whose workspace to open
    #[arg(long)]
    pub(crate) project: u64,
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long)]
    pub(crate) password: String,
    /// Per-request timeout in seconds
    #[arg(long)]
    pub(crate) timeout_secs: Option<u64>,
}

#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CreateArgs {
    pub(crate) name: String,
    /// Parent folder id (defaults to the project root)
    #[arg(long)]
    pub(crate) parent: Option<u64>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct RenameArgs {
    #[arg(value_enum)]
    pub(crate) kind: KindArg,
    pub(crate) id: u64,
    pub(crate) name: String,
}

#[derive(Args)]
pub(crate) struct MoveArgs {
    #[arg(value_enum)]
    pub(crate) kind: KindArg,
    pub(crate) id: u64,
    /// Destination folder id
    pub(crate) dest: u64,
}

#[derive(Args)]
pub(crate) struct RemoveArgs {
    #[arg(value_enum)]
    pub(crate) kind: KindArg,
    pub(crate) id: u64,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub(crate) yes: bool,
}

#[derive(Args)]
pub(crate) struct CatArgs {
    pub(crate) id: u64,
    /// Print the draft instead of the current content
    #[arg(long)]
    pub(crate) draft: bool,
    /// Emit the full file record as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct WriteArgs {
    pub(crate) id: u64,
    /// Read the new content from this path instead of stdin
    #[arg(long)]
    pub(crate) from: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct FileArg {
    pub(crate) id: u64,
}

#[derive(Args)]
pub(crate) struct NodeArgs {
    #[arg(value_enum)]
    pub(crate) kind: KindArg,
    pub(crate) id: u64,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

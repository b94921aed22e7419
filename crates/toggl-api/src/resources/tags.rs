use crate::resource::resource;

resource! {
    /// Tags of the current workspace.
    Tags {
        name: "Tags",
        path: "/tags",
        scope: Workspace,
        read_scope: Workspace,
    }
    capabilities: [Get, Create, Update, Delete]
}

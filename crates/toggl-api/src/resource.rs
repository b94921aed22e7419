//! Resource descriptors and capability traits.
//!
//! Every resource handle carries a static [`ResourceDescriptor`] and opts in
//! to the operations the remote API supports by implementing the matching
//! capability traits ([`Get`], [`Create`], [`Update`], [`Patch`],
//! [`Delete`]). Calling an unsupported operation is a compile error.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use togglwrapper_client::{uri, Error, Query, Result, TogglClient};

/// Where a resource lives in the URL hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Addressed from the API root, e.g. `/workspaces`.
    Global,
    /// Addressed under the current user, `/me`.
    Me,
    /// Addressed under the client's workspace, `/workspaces/{workspace_id}`.
    Workspace,
    /// Addressed under the client's organization,
    /// `/organizations/{organization_id}`.
    Organization,
}

impl Scope {
    /// Resolve the scope to a parent path for the given client.
    ///
    /// Fails with a configuration error when the client has no id for a
    /// workspace or organization scope.
    pub fn parent_path(self, client: &TogglClient) -> Result<Option<String>> {
        match self {
            Scope::Global => Ok(None),
            Scope::Me => Ok(Some("/me".to_string())),
            Scope::Workspace => client
                .workspace_id()
                .map(|wid| Some(format!("/workspaces/{wid}")))
                .ok_or_else(|| Error::config("a workspace id is required for this resource")),
            Scope::Organization => client
                .organization_id()
                .map(|oid| Some(format!("/organizations/{oid}")))
                .ok_or_else(|| {
                    Error::config("an organization id is required for this resource")
                }),
        }
    }
}

/// Whether an operation reads or writes.
///
/// Some resources are listed from one place and modified in another; time
/// entries are read from `/me` but written under a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Static description of a remote resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Human-readable name, used in tracing.
    pub name: &'static str,
    /// Base path, e.g. `/clients`.
    pub path: &'static str,
    /// Scope for create, update, patch and delete.
    pub scope: Scope,
    /// Scope for get.
    pub read_scope: Scope,
}

impl ResourceDescriptor {
    /// The scope that applies to the given access.
    pub const fn scope_for(&self, access: Access) -> Scope {
        match access {
            Access::Read => self.read_scope,
            Access::Write => self.scope,
        }
    }
}

/// A handle on one resource type, bound to a client.
pub trait Resource: Sync {
    /// The resource's static descriptor.
    const DESCRIPTOR: ResourceDescriptor;

    /// The client requests are dispatched through.
    fn client(&self) -> &TogglClient;

    /// The parent path for the given access.
    fn parent_path(&self, access: Access) -> Result<Option<String>> {
        Self::DESCRIPTOR.scope_for(access).parent_path(self.client())
    }

    /// Compile the request path for this resource.
    fn compile(
        &self,
        access: Access,
        id: Option<u64>,
        ids: Option<&[u64]>,
        child_path: Option<&str>,
    ) -> Result<String> {
        let parent = self.parent_path(access)?;
        uri::compile(
            Self::DESCRIPTOR.path,
            id,
            ids,
            parent.as_deref(),
            child_path,
        )
    }
}

fn require_target(id: Option<u64>, ids: Option<&[u64]>) -> Result<()> {
    let has_ids = ids.is_some_and(|ids| !ids.is_empty());
    if id.is_none() && !has_ids {
        return Err(Error::invalid_argument(
            "must provide either an id or a list of ids",
        ));
    }
    Ok(())
}

/// List instances, or fetch one by id.
pub trait Get: Resource {
    /// GET the resource list, one instance, or a child path of either.
    ///
    /// Parameters whose value is `None` are not sent.
    fn get(
        &self,
        id: Option<u64>,
        child_path: Option<&str>,
        params: &Query,
    ) -> impl Future<Output = Result<Value>> + Send {
        async move {
            let path = self.compile(Access::Read, id, None, child_path)?;
            self.client().get(&path, params).await
        }
    }
}

/// Create a new instance.
pub trait Create: Resource {
    /// POST `body` to the resource, or to a child path of it.
    fn create<B>(
        &self,
        body: &B,
        child_path: Option<&str>,
    ) -> impl Future<Output = Result<Value>> + Send
    where
        B: Serialize + Sync + ?Sized,
    {
        async move {
            let path = self.compile(Access::Write, None, None, child_path)?;
            self.client().post(&path, Some(body)).await
        }
    }
}

/// Replace one or several instances.
pub trait Update: Resource {
    /// PUT `body` to one instance, several instances, or the resource itself.
    ///
    /// Supplying both `id` and a non-empty `ids` is an invalid argument.
    fn update<B>(
        &self,
        id: Option<u64>,
        ids: Option<&[u64]>,
        child_path: Option<&str>,
        body: &B,
    ) -> impl Future<Output = Result<Value>> + Send
    where
        B: Serialize + Sync + ?Sized,
    {
        async move {
            let path = self.compile(Access::Write, id, ids, child_path)?;
            self.client().put(&path, body).await
        }
    }
}

/// Partially modify one or several instances.
pub trait Patch: Resource {
    /// PATCH one or several instances. Exactly one of `id` and `ids` is
    /// required.
    fn patch<B>(
        &self,
        id: Option<u64>,
        ids: Option<&[u64]>,
        child_path: Option<&str>,
        body: &B,
    ) -> impl Future<Output = Result<Value>> + Send
    where
        B: Serialize + Sync + ?Sized,
    {
        async move {
            require_target(id, ids)?;
            let path = self.compile(Access::Write, id, ids, child_path)?;
            self.client().patch(&path, body).await
        }
    }
}

/// Delete one or several instances.
pub trait Delete: Resource {
    /// DELETE one or several instances. Exactly one of `id` and `ids` is
    /// required; nothing is sent otherwise.
    fn delete(
        &self,
        id: Option<u64>,
        ids: Option<&[u64]>,
    ) -> impl Future<Output = Result<bool>> + Send {
        async move {
            require_target(id, ids)?;
            let path = self.compile(Access::Write, id, ids, None)?;
            self.client().delete(&path).await
        }
    }
}

/// Declare a resource handle bound to a [`TogglClient`], its descriptor and
/// the capabilities it supports.
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $handle:ident {
            name: $name:expr,
            path: $path:expr,
            scope: $scope:ident,
            read_scope: $read_scope:ident $(,)?
        }
        capabilities: [$($cap:ident),* $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $handle<'a> {
            client: &'a togglwrapper_client::TogglClient,
        }

        impl<'a> $handle<'a> {
            /// Bind the handle to a client.
            pub fn new(client: &'a togglwrapper_client::TogglClient) -> Self {
                Self { client }
            }
        }

        impl $crate::resource::Resource for $handle<'_> {
            const DESCRIPTOR: $crate::resource::ResourceDescriptor =
                $crate::resource::ResourceDescriptor {
                    name: $name,
                    path: $path,
                    scope: $crate::resource::Scope::$scope,
                    read_scope: $crate::resource::Scope::$read_scope,
                };

            fn client(&self) -> &togglwrapper_client::TogglClient {
                self.client
            }
        }

        $(impl $crate::resource::$cap for $handle<'_> {})*
    };
}

pub(crate) use resource;

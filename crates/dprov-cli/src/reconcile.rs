//! The reconciliation run: collection, then each declared field, then
//! the public read grant, strictly in that order. Only authentication
//! can abort a run; every failure past that point is recorded in the
//! report and the run continues.

use dprov_core::outcome::{EnsureOutcome, FieldOutcome, RunReport};
use dprov_core::schema::{self, CollectionSpec, FieldSpec, PermissionGrant};

use crate::client::{DirectusClient, Session};

pub struct Provisioner<'a> {
    client: &'a DirectusClient,
    collection: CollectionSpec,
    fields: Vec<FieldSpec>,
    grant: PermissionGrant,
}

impl<'a> Provisioner<'a> {
    /// Provisioner for the fixed articles blueprint.
    pub fn new(client: &'a DirectusClient) -> Self {
        Self {
            client,
            collection: schema::articles_collection(),
            fields: schema::article_fields(),
            grant: schema::public_read_grant(),
        }
    }

    pub async fn run(&self, session: &Session) -> RunReport {
        let collection_outcome = self.ensure_collection(session).await;

        let mut fields = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let outcome = self.ensure_field(field, session).await;
            fields.push((field.name().to_string(), outcome));
        }

        let permission_outcome = self.ensure_permission(session).await;

        RunReport {
            collection: self.collection.name().to_string(),
            collection_outcome,
            fields,
            permission_outcome,
        }
    }

    /// Create the collection unless the existence probe saw it. A
    /// failed create is recorded but does not stop field
    /// reconciliation: a partially created backend is a supported
    /// recovery scenario on the next run.
    async fn ensure_collection(&self, session: &Session) -> EnsureOutcome {
        let name = self.collection.name();
        if self.client.collection_exists(name, session).await {
            tracing::info!(collection = name, "collection already exists");
            return EnsureOutcome::AlreadyPresent;
        }

        match self.client.create_collection(&self.collection, session).await {
            Ok(()) => {
                tracing::info!(collection = name, "collection created");
                EnsureOutcome::Created
            }
            Err(e) => {
                tracing::warn!(collection = name, error = %e, "collection create failed");
                EnsureOutcome::Failed(e.to_string())
            }
        }
    }

    /// Try-update-then-create. The update doubles as the existence
    /// probe: a 2xx means the field was there and is now synchronized,
    /// any error means it has to be created. Cold-start and warm-start
    /// runs take the same path.
    async fn ensure_field(&self, field: &FieldSpec, session: &Session) -> FieldOutcome {
        let collection = self.collection.name();
        let update_err = match self.client.update_field(collection, field, session).await {
            Ok(()) => {
                tracing::info!(field = field.name(), "field updated");
                return FieldOutcome::Updated;
            }
            Err(e) => e,
        };

        tracing::debug!(
            field = field.name(),
            error = %update_err,
            "field update failed, attempting create"
        );
        match self.client.create_field(collection, field, session).await {
            Ok(()) => {
                tracing::info!(field = field.name(), "field created");
                FieldOutcome::Created
            }
            Err(e) => {
                tracing::warn!(field = field.name(), error = %e, "field create failed");
                FieldOutcome::Failed(e.to_string())
            }
        }
    }

    /// A 400-class response to the create means the grant is already
    /// there; that is a success condition, not an error.
    async fn ensure_permission(&self, session: &Session) -> EnsureOutcome {
        match self.client.create_permission(&self.grant, session).await {
            Ok(()) => {
                tracing::info!(collection = self.grant.collection.as_str(), "public read permission created");
                EnsureOutcome::Created
            }
            Err(e) if e.is_client_error() => {
                tracing::info!(
                    collection = self.grant.collection.as_str(),
                    "public read permission already exists"
                );
                EnsureOutcome::AlreadyPresent
            }
            Err(e) => {
                tracing::warn!(error = %e, "permission create failed");
                EnsureOutcome::Failed(e.to_string())
            }
        }
    }
}

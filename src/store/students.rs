//! Student Store Module
//!
//! The document-store access layer: one typed collection handle plus the
//! filter and change-set builders used against it.

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};

use crate::config::Config;
use crate::error::Result;
use crate::models::{StudentFilterParams, UpdateStudentRequest};
use crate::store::{Address, StudentDocument, MAX_LIST_RESULTS};

// == Student Store ==
/// Handle to the student collection.
///
/// The driver's handles are internally pooled, so cloning this is cheap and
/// every clone talks to the same deployment.
#[derive(Debug, Clone)]
pub struct StudentStore {
    students: Collection<StudentDocument>,
}

impl StudentStore {
    // == Constructors ==
    /// Creates a store from an existing collection handle.
    pub fn new(students: Collection<StudentDocument>) -> Self {
        Self { students }
    }

    /// Builds a client from the configured connection string and resolves the
    /// configured database and collection.
    ///
    /// The driver connects lazily; a bad deployment address surfaces on the
    /// first operation, not here.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_url).await?;
        let students = client
            .database(&config.database_name)
            .collection(&config.collection_name);

        Ok(Self::new(students))
    }

    // == Insert ==
    /// Inserts one new student record and returns the assigned identifier.
    ///
    /// The identifier is assigned here, exactly once; callers never supply
    /// one. Duplicate content is permitted.
    pub async fn insert(&self, name: String, age: i32, address: Address) -> Result<ObjectId> {
        let id = ObjectId::new();
        let document = StudentDocument {
            id: Some(id),
            name,
            age,
            address,
        };
        self.students.insert_one(document).await?;

        Ok(id)
    }

    // == Filtered List ==
    /// Returns the records matching the given filter params, in the store's
    /// natural order, capped at [`MAX_LIST_RESULTS`] documents.
    pub async fn filtered(&self, params: &StudentFilterParams) -> Result<Vec<StudentDocument>> {
        let cursor = self
            .students
            .find(filter_document(params))
            .limit(MAX_LIST_RESULTS)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    // == Get ==
    /// Looks up a single record by id.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<StudentDocument>> {
        Ok(self.students.find_one(doc! { "_id": id }).await?)
    }

    // == Partial Update ==
    /// Applies a partial update and returns the record as it stands after.
    ///
    /// Only fields present and non-null in the payload are merged into the
    /// stored document. An empty change-set is a no-op: the current record is
    /// returned untouched. `None` means no record has that id.
    pub async fn apply_patch(
        &self,
        id: ObjectId,
        update: &UpdateStudentRequest,
    ) -> Result<Option<StudentDocument>> {
        let changes = change_set(update);
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let updated = self
            .students
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": changes })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    // == Delete ==
    /// Removes the record with the given id.
    ///
    /// Returns whether a record was actually removed.
    pub async fn remove(&self, id: ObjectId) -> Result<bool> {
        let result = self.students.delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count == 1)
    }
}

// == Query Builders ==

/// Builds the list filter from the optional query params.
///
/// `country` is an exact match on the embedded address; `age` is a lower
/// bound. Both present means both apply; neither yields an empty filter
/// matching every document.
pub fn filter_document(params: &StudentFilterParams) -> Document {
    let mut filter = Document::new();
    if let Some(country) = &params.country {
        filter.insert("address.country", country.clone());
    }
    if let Some(age) = params.age {
        filter.insert("age", doc! { "$gte": age });
    }

    filter
}

/// Builds the `$set` change-set from a partial update payload.
///
/// A field enters the change-set only when it is present and non-null; an
/// explicit null leaves the stored value alone, same as an omitted field.
pub fn change_set(update: &UpdateStudentRequest) -> Document {
    let mut changes = Document::new();
    if let Some(Some(name)) = &update.name {
        changes.insert("name", name.clone());
    }
    if let Some(Some(age)) = update.age {
        changes.insert("age", age);
    }
    if let Some(Some(address)) = &update.address {
        changes.insert(
            "address",
            doc! { "city": address.city.clone(), "country": address.country.clone() },
        );
    }

    changes
}

use mongodb::{Client, Collection};

use crate::dbs::mongo::models::MongoDocumentUpload;
use crate::error::Result;

#[derive(Clone)]
pub struct MongoDocumentRepository {
    collection: Collection<MongoDocumentUpload>,
}

impl MongoDocumentRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("documents");
        Self { collection }
    }

    pub async fn save_document(&self, document: MongoDocumentUpload) -> Result<()> {
        self.collection.insert_one(&document).await?;
        Ok(())
    }
}

use mongodb::{
    bson::doc,
    Database, IndexModel,
};

use super::mongo_store::ITEMS_COLLECTION;
use super::watchlist_store::StoreResult;

pub async fn ensure_indexes(db: &Database) -> StoreResult<()> {
    let col = db.collection::<mongodb::bson::Document>(ITEMS_COLLECTION);

    // list by owner
    {
        let model = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();

        col.create_index(model, None).await?;
    }

    // existence check by (coin, user); not unique, duplicates are allowed
    {
        let model = IndexModel::builder()
            .keys(doc! { "coin_id": 1, "user_id": 1 })
            .build();

        col.create_index(model, None).await?;
    }

    Ok(())
}

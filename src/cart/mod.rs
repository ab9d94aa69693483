//! Cart state transitions and the store that owns them.

mod intent;
mod reducer;

pub use intent::CartIntent;
pub use reducer::CartReducer;

use crate::actor_framework::{Store, StoreActor, StoreClient};

/// Synchronous cart store, for callers that own the event loop themselves.
pub type CartStore = Store<CartReducer>;
pub type CartActor = StoreActor<CartReducer>;
pub type CartStoreClient = StoreClient<CartReducer>;

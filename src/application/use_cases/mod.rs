/// Use cases module containing application business logic orchestration
mod collect_inventory;

pub use collect_inventory::CollectInventoryUseCase;

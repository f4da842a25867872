/// Inventory domain - pure logic for turning a dpkg listing into package records
pub mod domain;
pub mod services;

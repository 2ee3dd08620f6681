pub mod decision;
pub mod score_ledger;

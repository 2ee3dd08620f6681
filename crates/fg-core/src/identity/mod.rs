pub mod identity_reconciler;
pub mod reconcile_action;

pub mod browse;
pub mod close;
pub mod create;
pub mod delete;
pub mod inspect;
pub mod open;
pub mod save;
pub mod test_run;
pub mod usage;

mod account_tests;
mod apply_tests;
mod table_tests;
mod transition_tests;

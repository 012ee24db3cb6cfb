pub mod recase_convert;

// src/gui/components/mod.rs
pub mod result_header;
pub mod search_bar;
pub mod section_list;

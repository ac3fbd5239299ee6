pub mod my_page;
pub mod page_not_found;

pub mod app;
pub mod kiosk_dialogs;
pub mod kiosk_filter;
pub mod kiosk_pagination;
pub mod kiosk_table;
pub mod kiosks_page;
pub mod sign_in;

pub use app::App;
pub use kiosk_dialogs::KioskDialogsView;
pub use kiosk_filter::KioskFilter;
pub use kiosk_pagination::KioskPagination;
pub use kiosk_table::KioskTable;
pub use kiosks_page::KiosksPage;
pub use sign_in::SignIn;

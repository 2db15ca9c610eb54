mod persistence;

pub use persistence::{
    load_product, load_products_csv, load_profile, load_thresholds, save_profile, write_report_csv,
};

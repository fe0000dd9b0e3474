pub mod catalog;
pub mod payment;
pub mod quiz;
pub mod stylist;

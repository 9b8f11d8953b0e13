pub mod compare;
pub mod kpis;
pub mod recommend;
pub mod report;

//! Stateless decode/encode for the three persisted playlist forms.

pub mod cache;
pub mod cmus;
pub mod m3u8;

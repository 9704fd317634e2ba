pub mod boll;
pub mod kdj;
pub mod ma;
pub mod macd;
pub mod rsi;

pub mod ucr;

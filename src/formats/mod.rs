pub mod pak;

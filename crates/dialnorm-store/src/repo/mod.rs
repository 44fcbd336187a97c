pub mod phone_numbers;

pub use phone_numbers::PhoneNumbersRepo;

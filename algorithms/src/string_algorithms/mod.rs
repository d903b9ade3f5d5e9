pub mod anagram;
pub mod first_recurring;

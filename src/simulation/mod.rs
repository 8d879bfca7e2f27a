pub mod random_cases;

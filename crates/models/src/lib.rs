pub mod errors;
pub mod db;
pub mod etudiant;

#[cfg(test)]
mod tests;

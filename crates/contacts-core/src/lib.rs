pub mod contact;
#[cfg(test)]
mod tests;

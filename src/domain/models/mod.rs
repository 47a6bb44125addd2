pub mod felicitation;
pub mod guest;
pub mod wedding;

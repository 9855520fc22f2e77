pub mod energy;
pub mod layout;
pub mod transitions;

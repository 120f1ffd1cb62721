mod home;
pub use home::Home;

mod pantry;
pub use pantry::Pantry;

mod plating;
pub use plating::Plating;

mod judging;
pub use judging::Judging;

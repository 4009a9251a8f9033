mod draw;
mod numbers;
mod participant;
mod payment_status;

pub use draw::{DRAW_SIZE, DrawnNumbers};
pub use numbers::{ChosenNumbers, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_QUOTA, NumbersError};
pub use participant::{Participant, ParticipantRow};
pub use payment_status::PaymentStatus;

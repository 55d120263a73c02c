pub mod rounding;
pub mod splitter;

pub use splitter::{
    compute_schedule, split_installments, InstallmentSchedule, ScheduleInput, SplitPlan,
    MAX_AMOUNT,
};

pub mod cytometry;

pub use cytometry::{
    CellPopulation, CvConfiguration, ProcessingMode, ProcessingRun, RawScheduleEntry, ScheduleEntry,
};

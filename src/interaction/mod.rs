mod selection;

pub use selection::{
    AxisLabel, LabelClick, LabelState, SelectionDispatch, SelectionEvent, SelectionState,
    SelectionTransition,
};

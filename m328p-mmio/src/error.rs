use snafu::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("value {value:#x} does not fit in a {width}-bit field"))]
    ValueOutOfRange { value: u8, width: u8 },

    #[snafu(display("no interrupt vector at index {index}"))]
    InvalidVector { index: u8 },
}

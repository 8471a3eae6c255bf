mod decoder;

pub use self::decoder::Decoder;

pub use crate::{
    error::*, record::*, splay::*, text::*,
};

pub(crate) mod equalize;
pub(crate) mod tone;
pub(crate) mod ycrcb;

pub mod afm;
pub mod akps;
pub mod braden;
pub mod brua;
pub mod demmi;
pub mod frailty;
pub mod nursing;
pub mod palliative;
pub mod rug_adl;

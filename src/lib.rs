//! Proyecto 2 SO: simulador de planificación de CPU.
//!
//! La biblioteca tiene tres partes:
//! - [`process`]: la tabla de procesos que comparte todo el simulador.
//! - [`scheduler`]: las cuatro políticas de planificación (RR, SPN, SRT, HRRN),
//!   cada una con su propio estado por corrida.
//! - [`sim`]: el driver que avanza el reloj tick a tick y arma el reporte.

pub mod process;
pub mod scheduler;
pub mod sim;

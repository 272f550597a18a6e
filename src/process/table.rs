// table.rs - la "tabla" de procesos que comparten el driver y los schedulers

// =========================
// Tipos básicos
// =========================

/// Identificador lógico de un proceso dentro del simulador.
/// Es simplemente el índice dentro de la tabla de procesos; no hay un
/// PID aparte. El orden de la tabla es también el criterio de desempate
/// ("el que está antes en la tabla gana").
pub type ProcessIndex = usize;

/// Estructura que representa a **un proceso** dentro del simulador.
///
/// La tabla es del driver: los schedulers sólo la leen. Los únicos campos
/// que cambian durante una corrida son `time_scheduled` e `is_done`, y los
/// actualiza el driver al final de cada tick, antes del siguiente `select`.
#[derive(Debug, Clone)]
pub struct Process {
    /// Tick en el que el proceso llega al sistema. No cambia.
    pub start_time: u32,
    /// Ticks de servicio que necesita en total. No cambia.
    pub total_time_needed: u32,
    /// Ticks de CPU que ya recibió. Sólo crece.
    pub time_scheduled: u32,
    /// `true` cuando `time_scheduled` alcanzó `total_time_needed`.
    pub is_done: bool,
}

impl Process {
    /// Crea un proceso todavía sin ejecutar.
    ///
    /// ```rust
    /// use proyecto2::process::Process;
    ///
    /// let p = Process::new(0, 4);
    /// assert_eq!(p.time_scheduled, 0);
    /// assert!(!p.is_done);
    /// ```
    pub fn new(start_time: u32, total_time_needed: u32) -> Self {
        Self {
            start_time,
            total_time_needed,
            time_scheduled: 0,
            is_done: false,
        }
    }
}

// =========================
// Validación de la tabla
// =========================

/// Revisa que la tabla sea una entrada válida para una corrida.
///
/// Los schedulers asumen entrada bien formada (es responsabilidad de quien
/// arma la tabla), así que esto se chequea una sola vez al arrancar:
/// - la tabla no puede estar vacía,
/// - ningún proceso puede pedir 0 ticks de servicio.
pub fn validate_table(table: &[Process]) -> Result<(), &'static str> {
    if table.is_empty() {
        return Err("process table is empty");
    }
    if table.iter().any(|p| p.total_time_needed == 0) {
        return Err("total_time_needed must be >= 1");
    }
    Ok(())
}

/// `true` si ya no queda ningún proceso pendiente.
pub fn all_done(table: &[Process]) -> bool {
    table.iter().all(|p| p.is_done)
}

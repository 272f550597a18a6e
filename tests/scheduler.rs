extern crate proyecto2;

use proyecto2::process::Process;
use proyecto2::scheduler::util::{remaining_time, response_ratio, waiting_time};
use proyecto2::scheduler::{
    HighestResponseRatioNext, RoundRobin, ShortestProcessNext, ShortestRemainingTime,
};

// Hace el trabajo del driver después de un tick: sumar servicio al que
// corrió y marcarlo terminado si ya completó. Un índice ya terminado
// (hueco de SPN) se ignora.
fn tick(table: &mut [Process], selected: Option<usize>) {
    if let Some(idx) = selected {
        let p = &mut table[idx];
        if p.is_done {
            return;
        }
        p.time_scheduled += 1;
        if p.time_scheduled == p.total_time_needed {
            p.is_done = true;
        }
    }
}

// =========================
// Round Robin
// =========================

#[test]
fn rr_escenario_quantum_2() {
    // P0(llega 0, necesita 4), P1(llega 1, necesita 2), quantum 2
    let mut table = vec![Process::new(0, 4), Process::new(1, 2)];
    let mut rr = RoundRobin::new(2);

    let mut schedule = Vec::new();
    for t in 0..6 {
        let sel = rr.select(t, &table, 2);
        schedule.push(sel);
        tick(&mut table, sel);
    }

    assert_eq!(
        schedule,
        vec![Some(0), Some(0), Some(1), Some(1), Some(0), Some(0)]
    );
    // con los dos terminados, el procesador queda ocioso
    assert_eq!(rr.select(6, &table, 2), None);
}

#[test]
fn rr_rota_al_vencerse_el_quantum() {
    // tres procesos iguales: nadie corre más de 2 ticks seguidos
    let mut table = vec![Process::new(0, 3), Process::new(0, 3), Process::new(0, 3)];
    let mut rr = RoundRobin::new(2);

    let mut schedule = Vec::new();
    for t in 0..9 {
        let sel = rr.select(t, &table, 2);
        schedule.push(sel.unwrap());
        tick(&mut table, sel);
    }

    assert_eq!(schedule, vec![0, 0, 1, 1, 2, 2, 0, 1, 2]);
    assert!(table.iter().all(|p| p.is_done));
}

#[test]
fn rr_proceso_solo_puede_exceder_el_quantum() {
    // si es el único listo, la rotación lo devuelve al frente y sigue
    let mut table = vec![Process::new(0, 5)];
    let mut rr = RoundRobin::new(2);

    for t in 0..5 {
        let sel = rr.select(t, &table, 2);
        assert_eq!(sel, Some(0));
        tick(&mut table, sel);
    }
    assert!(table[0].is_done);
}

#[test]
fn rr_ocioso_antes_de_la_primera_llegada() {
    // la cola vacía no debe reventar aunque el contador esté en cero
    let mut table = vec![Process::new(3, 2)];
    let mut rr = RoundRobin::new(2);

    for t in 0..3 {
        assert_eq!(rr.select(t, &table, 2), None);
    }
    let sel = rr.select(3, &table, 2);
    assert_eq!(sel, Some(0));
    tick(&mut table, sel);
    assert_eq!(rr.select(4, &table, 2), Some(0));
}

// =========================
// Shortest Process Next
// =========================

#[test]
fn spn_no_expropia_aunque_llegue_uno_mas_corto() {
    // P0(0,5) ya corre cuando llega P1(1,1): sigue P0 hasta terminar
    let mut table = vec![Process::new(0, 5), Process::new(1, 1)];
    let mut spn = ShortestProcessNext::new();

    for t in 0..5 {
        let sel = spn.select(t, &table);
        assert_eq!(sel, Some(0));
        tick(&mut table, sel);
    }
    assert!(table[0].is_done);

    let sel = spn.select(5, &table);
    assert_eq!(sel, Some(1));
    tick(&mut table, sel);
    assert!(table[1].is_done);
}

#[test]
fn spn_elige_el_de_menor_servicio_total() {
    let mut table = vec![Process::new(0, 4), Process::new(0, 2), Process::new(0, 3)];
    let mut spn = ShortestProcessNext::new();

    let mut order = Vec::new();
    for t in 0..9 {
        let sel = spn.select(t, &table);
        if order.last() != sel.as_ref() {
            order.push(sel.unwrap());
        }
        tick(&mut table, sel);
    }

    assert_eq!(order, vec![1, 2, 0]);
}

#[test]
fn spn_empate_gana_el_de_menor_indice_de_tabla() {
    let table = vec![Process::new(0, 3), Process::new(0, 3)];
    let mut spn = ShortestProcessNext::new();
    assert_eq!(spn.select(0, &table), Some(0));
}

#[test]
fn spn_ocioso_antes_de_la_primera_llegada() {
    let table = vec![Process::new(2, 1)];
    let mut spn = ShortestProcessNext::new();
    assert_eq!(spn.select(0, &table), None);
    assert_eq!(spn.select(1, &table), None);
    assert_eq!(spn.select(2, &table), Some(0));
}

// =========================
// Shortest Remaining Time
// =========================

#[test]
fn srt_escenario_expropiacion() {
    // P0(0,5), P1(2,2): en t2 remaining(P0)=3 > remaining(P1)=2,
    // así que SRT cambia a P1 y retoma P0 en t4
    let mut table = vec![Process::new(0, 5), Process::new(2, 2)];
    let mut srt = ShortestRemainingTime::new();

    let mut schedule = Vec::new();
    for t in 0..7 {
        let sel = srt.select(t, &table);
        schedule.push(sel.unwrap());
        tick(&mut table, sel);
    }

    assert_eq!(schedule, vec![0, 0, 1, 1, 0, 0, 0]);
    assert!(table.iter().all(|p| p.is_done));
}

#[test]
fn srt_empate_gana_el_indice_de_tabla_no_la_posicion() {
    // P1 llega primero (posición 0 de la lista) pero en el empate de
    // remaining debe ganar P0, que está antes en la tabla
    let mut table = vec![Process::new(5, 3), Process::new(0, 8)];
    let mut srt = ShortestRemainingTime::new();

    let mut schedule = Vec::new();
    for t in 0..11 {
        let sel = srt.select(t, &table);
        schedule.push(sel.unwrap());
        tick(&mut table, sel);
    }

    // en t5: remaining(P1)=3 == remaining(P0)=3 → corre P0
    assert_eq!(schedule, vec![1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1]);
}

#[test]
fn srt_ocioso_antes_de_la_primera_llegada() {
    let table = vec![Process::new(4, 1)];
    let mut srt = ShortestRemainingTime::new();
    for t in 0..4 {
        assert_eq!(srt.select(t, &table), None);
    }
    assert_eq!(srt.select(4, &table), Some(0));
}

#[test]
fn srt_siempre_corre_el_de_menor_remaining() {
    // cargas variadas: en cada tick el elegido tiene remaining mínimo
    // entre los listos, con empates hacia el menor índice de tabla
    let mut table = vec![
        Process::new(0, 6),
        Process::new(1, 3),
        Process::new(1, 3),
        Process::new(4, 1),
        Process::new(10, 2),
    ];
    let mut srt = ShortestRemainingTime::new();

    let mut t = 0;
    while !table.iter().all(|p| p.is_done) {
        let sel = srt.select(t, &table);

        if let Some(idx) = sel {
            let rem = remaining_time(&table[idx]);
            for (j, p) in table.iter().enumerate() {
                if j == idx || p.is_done || p.start_time > t {
                    continue;
                }
                let other = remaining_time(p);
                assert!(rem <= other, "tick {t}: P{idx} (rem {rem}) vs P{j} (rem {other})");
                if rem == other {
                    assert!(idx < j, "tick {t}: empate mal resuelto entre P{idx} y P{j}");
                }
            }
        }

        tick(&mut table, sel);
        t += 1;
    }
}

// =========================
// Highest Response Ratio Next
// =========================

#[test]
fn hrrn_escenario_con_ratios() {
    // al completarse P0 en t2, los ratios en t3 son:
    //   P1: (2+6)/6 = 1.33   P2: (1+2)/2 = 1.5  → corre P2
    let mut table = vec![Process::new(0, 3), Process::new(1, 6), Process::new(2, 2)];
    let mut hrrn = HighestResponseRatioNext::new();

    let mut schedule = Vec::new();
    for t in 0..11 {
        let sel = hrrn.select(t, &table);
        schedule.push(sel.unwrap());
        tick(&mut table, sel);
    }

    assert_eq!(schedule, vec![0, 0, 0, 2, 2, 1, 1, 1, 1, 1, 1]);
    assert!(table.iter().all(|p| p.is_done));
}

#[test]
fn hrrn_no_expropia_entre_completaciones() {
    let mut table = vec![Process::new(0, 4), Process::new(1, 1)];
    let mut hrrn = HighestResponseRatioNext::new();

    let mut schedule = Vec::new();
    for t in 0..5 {
        let sel = hrrn.select(t, &table);
        schedule.push(sel.unwrap());
        tick(&mut table, sel);
    }

    // P1 es más corto pero no interrumpe a P0
    assert_eq!(schedule, vec![0, 0, 0, 0, 1]);
}

#[test]
fn hrrn_empate_gana_el_indice_de_tabla_no_la_posicion() {
    // en t4 los ratios empatan en 1.5:
    //   P2: (2+4)/4   P0: (1+2)/2
    // P2 está antes en la lista de listos, pero gana P0 por índice de tabla
    let mut table = vec![Process::new(3, 2), Process::new(0, 4), Process::new(2, 4)];
    let mut hrrn = HighestResponseRatioNext::new();

    let mut schedule = Vec::new();
    for t in 0..10 {
        let sel = hrrn.select(t, &table);
        schedule.push(sel.unwrap());
        tick(&mut table, sel);
    }

    assert_eq!(schedule, vec![1, 1, 1, 1, 0, 0, 2, 2, 2, 2]);
}

#[test]
fn hrrn_ocioso_antes_de_la_primera_llegada() {
    let table = vec![Process::new(3, 2)];
    let mut hrrn = HighestResponseRatioNext::new();
    for t in 0..3 {
        assert_eq!(hrrn.select(t, &table), None);
    }
    assert_eq!(hrrn.select(3, &table), Some(0));
}

// =========================
// Helpers compartidos
// =========================

#[test]
fn helpers_de_tiempos() {
    let mut p = Process::new(2, 4);
    assert_eq!(remaining_time(&p), 4);

    // recién llegado: no esperó nada y su ratio es 1.0
    assert_eq!(waiting_time(&p, 2), 0);
    assert_eq!(response_ratio(&p, 2), 1.0);

    // dos ticks después sin correr: espera 2, ratio (2+4)/4
    assert_eq!(waiting_time(&p, 4), 2);
    assert_eq!(response_ratio(&p, 4), 1.5);

    // un tick de servicio descuenta de la espera y del remaining
    p.time_scheduled = 1;
    assert_eq!(remaining_time(&p), 3);
    assert_eq!(waiting_time(&p, 4), 1);
}

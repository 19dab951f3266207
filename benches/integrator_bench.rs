use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lane_emden::data::ColumnData;
use lane_emden::lane_emden::{dy_dx, dz_dx, solve, LaneEmdenParams};
use lane_emden::ode::{
  CoupledPair, EulerSettings, Integrator, IntegratorType, RK4Settings,
  SwappableIntegrator,
};
use lane_emden::plot::raster::render;
use lane_emden::synthetic::{gaussian_moment, sample, SyntheticParams};
use lane_emden::{Figure, PlotRequest};

const INTEGRATOR_TYPES: [IntegratorType; 2] = [
  IntegratorType::Euler(EulerSettings {}),
  IntegratorType::RK4(RK4Settings {}),
];

fn single_step(c: &mut Criterion) {
  let system = CoupledPair::new(dy_dx, dz_dx(1.5));

  for integrator_type in INTEGRATOR_TYPES.iter() {
    let mut integrator = SwappableIntegrator::new(*integrator_type);
    let mut state = [1.0, 0.0];
    let mut x = 0.001;
    let h = 1e-9;

    c.bench_function(&format!("step {:?}", integrator_type), |b| {
      b.iter(|| integrator.step(&system, &mut state, &mut x, &h))
    });
  }
}

fn lane_emden_solve(c: &mut Criterion) {
  for integrator_type in INTEGRATOR_TYPES.iter() {
    for step in [0.01, 0.001].iter() {
      let params = LaneEmdenParams {
        step: *step,
        ..Default::default()
      };

      c.bench_function(
        &format!("lane-emden {:?} h = {}", integrator_type, step),
        |b| b.iter(|| solve(black_box(&params), *integrator_type)),
      );
    }
  }
}

fn raster(c: &mut Criterion) {
  let params = SyntheticParams {
    step: 0.0001,
    ..Default::default()
  };
  let data = ColumnData::from_columns(sample(&params, gaussian_moment))
    .expect("sampled columns have equal length");

  for style in ["-", "r--", "ko"].iter() {
    let request = PlotRequest {
      style: style.parse().expect("valid style"),
      ..Default::default()
    };
    let figure = Figure::from_data(&data, &request).expect("plottable data");

    c.bench_function(&format!("render {:?} x {}", style, data.num_rows()), |b| {
      b.iter(|| render(black_box(&figure)))
    });
  }
}

criterion_group!(benches, single_step, lane_emden_solve, raster);
criterion_main!(benches);

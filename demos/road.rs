use road_spline::Spline;

fn main() {
    let mut road = Spline::new();

    road.add_point(10.0, 10.0);
    road.add_point(400.0, 50.0);
    road.add_point(600.0, 150.0);
    road.add_point(550.0, 300.0);
    road.add_point(300.0, 450.0);
    road.add_point(150.0, 350.0);
    road.add_point(200.0, 270.0);

    assert!(road.fit());

    // sample the way a renderer would, 30 segments per control point
    let step = 1.0 / (road.count() * 30) as f64;
    let mut t = 0.0;
    while t < 1.0 {
        let pt = road.evaluate(t).unwrap();
        println!("{:.3};{:.2};{:.2}", t, pt.x, pt.y);
        t += step;
    }
}

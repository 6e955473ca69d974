#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use d2affine::*;
    use winit::{
        dpi::LogicalSize,
        event::{Event, WindowEvent},
        event_loop::{ControlFlow, EventLoop},
        platform::windows::WindowExtWindows,
        window::WindowBuilder,
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("d2affine transform")
        .with_inner_size(LogicalSize::new(640, 480))
        .build(&event_loop)?;
    let window_size = window.inner_size();
    let config = SwapChainConfig::default().with_dpi(window.scale_factor() as f32 * 96.0);
    let context = Context::new(Direct2D::new(
        window.hwnd(),
        (window_size.width, window_size.height),
        &config,
    )?);
    let mut back_buffer = Some(context.back_buffer()?);
    let factory = context.create_factory();
    let fill = factory.create_solid_color_brush(Rgba::from_rgb(0x3399ff, 1.0))?;
    let outline = factory.create_solid_color_brush([1.0, 1.0, 1.0, 1.0])?;
    let square = Rect::new(-40.0, -40.0, 40.0, 40.0);
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::RedrawRequested(_) => {
                let Some(target) = back_buffer.as_ref() else {
                    return;
                };
                let size = window.inner_size().to_logical::<f32>(window.scale_factor());
                let center = point(size.width / 2.0, size.height / 2.0);
                let ret = context.draw(target, |cmd| {
                    cmd.clear([0.0, 0.0, 0.3, 1.0]);
                    for i in 0..12 {
                        let angle = i as f32 * 30.0;
                        let m = Matrix3x2::translation(0.0, -140.0)
                            * Matrix3x2::rotation(angle)
                            * Matrix3x2::translation(center.x, center.y);
                        cmd.with_transform(&m, |cmd| {
                            cmd.with_transform(&Matrix3x2::scale(0.5, 0.5), |cmd| {
                                cmd.fill(&square, &fill);
                            });
                            cmd.stroke(&square, &outline, 2.0);
                        });
                    }
                    cmd.stroke(&Ellipse::circle(center, 140.0), &outline, 1.0);
                });
                match ret {
                    Ok(_) => {}
                    Err(e) if e == ErrorKind::RecreateTarget => {
                        *control_flow = ControlFlow::Exit;
                    }
                    Err(e) => panic!("{}", e),
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                drop(back_buffer.take());
                context.resize((size.width, size.height)).unwrap();
                back_buffer = Some(context.back_buffer().unwrap());
                window.request_redraw();
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = ControlFlow::Exit,
            _ => {}
        }
    });
}

#[cfg(not(windows))]
fn main() {
    let m = d2affine::Matrix3x2::rotation_at(90.0, (1.0, 1.0));
    println!("{} maps (2, 1) to {:?}", m, m.transform_point((2.0, 1.0)));
}

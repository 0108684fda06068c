fn main() -> eframe::Result<()> {
    problem_solver::native::run()
}
